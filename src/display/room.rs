//! Room display formatting
//!
//! Formats rooms for the menu's list views.

use crate::models::Room;

/// Format all rooms, one status line each
pub fn format_room_list(rooms: &[&Room]) -> String {
    if rooms.is_empty() {
        return "No rooms available.\n".to_string();
    }

    let mut output = String::new();
    for room in rooms {
        let status = match room.guest() {
            Some(guest) => format!("Allocated to {}", guest),
            None => "Available".to_string(),
        };

        output.push_str(&format!(
            "Room {} - {} - ${} - {}\n",
            room.number, room.room_type, room.rate, status
        ));
    }

    output
}

/// Format occupied rooms in snapshot line format
pub fn format_allocation_list(rooms: &[&Room]) -> String {
    if rooms.is_empty() {
        return "No room allocations yet.\n".to_string();
    }

    rooms
        .iter()
        .map(|room| format!("{}\n", room.snapshot_line()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Rate;

    #[test]
    fn test_empty_lists() {
        assert_eq!(format_room_list(&[]), "No rooms available.\n");
        assert_eq!(format_allocation_list(&[]), "No room allocations yet.\n");
    }

    #[test]
    fn test_room_list_status() {
        let free = Room::new("101", "Deluxe", Rate::new(100.0).unwrap());
        let mut taken = Room::new("102", "Suite", Rate::new(249.99).unwrap());
        taken.allocate("Bob").unwrap();

        let output = format_room_list(&[&free, &taken]);
        assert_eq!(
            output,
            "Room 101 - Deluxe - $100 - Available\nRoom 102 - Suite - $249.99 - Allocated to Bob\n"
        );
    }

    #[test]
    fn test_allocation_list() {
        let mut taken = Room::new("102", "Suite", Rate::new(250.0).unwrap());
        taken.allocate("Bob").unwrap();

        assert_eq!(
            format_allocation_list(&[&taken]),
            "Room 102 | Type: Suite | Price: 250 | Guest: Bob | Allocated: True\n"
        );
    }
}
