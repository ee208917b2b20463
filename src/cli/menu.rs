//! Interactive menu
//!
//! A numbered text menu over the room registry, the snapshot file and the
//! backup file. Every failure is reported to the operator and the loop
//! carries on; only exit or end of input stops it.

use std::io::{BufRead, Write};

use crate::backup::{BackupManager, RotateOutcome};
use crate::config::paths::HotelPaths;
use crate::config::settings::Settings;
use crate::display::{format_allocation_list, format_room_list};
use crate::error::{HotelError, HotelResult};
use crate::services::RoomService;
use crate::storage::{RoomRegistry, SnapshotStore};

/// A menu selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddRoom,
    DisplayRooms,
    AllocateRoom,
    DeallocateRoom,
    DisplayAllocations,
    Billing,
    SaveSnapshot,
    ShowSnapshot,
    BackupAndClear,
    Exit,
}

impl MenuChoice {
    /// Parse the operator's menu input
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "1" => Some(Self::AddRoom),
            "2" => Some(Self::DisplayRooms),
            "3" => Some(Self::AllocateRoom),
            "4" => Some(Self::DeallocateRoom),
            "5" => Some(Self::DisplayAllocations),
            "6" => Some(Self::Billing),
            "7" => Some(Self::SaveSnapshot),
            "8" => Some(Self::ShowSnapshot),
            "9" => Some(Self::Exit),
            "10" => Some(Self::BackupAndClear),
            _ => None,
        }
    }
}

const MENU: &str = "\n--- Hotel Management System Menu ---
1. Add Rooms
2. Display Rooms
3. Allocate Rooms
4. De-Allocate Rooms
5. Display Room Allocation Details
6. Billing
7. Save Room Allocation to File
8. Show Room Allocation from File
10. Backup and Clear File
9. Exit
";

/// Operator message for a snapshot save attempt
fn save_status(result: &HotelResult<usize>) -> String {
    match result {
        Ok(_) => "Room allocation saved to file.".to_string(),
        Err(HotelError::AccessDenied(msg)) => format!("Access Denied: {}", msg),
        Err(e) => format!("File Error: {}", e),
    }
}

/// Menu session owning the registry and the operator's files
pub struct Menu<R, W> {
    input: R,
    output: W,
    registry: RoomRegistry,
    snapshots: SnapshotStore,
    backups: BackupManager,
    strict_rates: bool,
    input_closed: bool,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    /// Create a menu session with an empty registry
    pub fn new(input: R, output: W, snapshots: SnapshotStore, backups: BackupManager) -> Self {
        Self {
            input,
            output,
            registry: RoomRegistry::new(),
            snapshots,
            backups,
            strict_rates: false,
            input_closed: false,
        }
    }

    /// Create a menu session for the configured operator's files
    pub fn from_settings(input: R, output: W, paths: &HotelPaths, settings: &Settings) -> Self {
        let snapshots = SnapshotStore::new(
            paths.snapshot_file(&settings.operator_id),
            settings.timestamp_format.clone(),
        );
        let backups = BackupManager::for_operator(paths, settings);

        let mut menu = Self::new(input, output, snapshots, backups);
        menu.strict_rates = settings.strict_rates;
        menu
    }

    /// The rooms registered so far
    pub fn registry(&self) -> &RoomRegistry {
        &self.registry
    }

    /// Run until the operator exits or input ends
    ///
    /// Only failures writing to the output are returned.
    pub fn run(&mut self) -> HotelResult<()> {
        loop {
            write!(self.output, "{}", MENU)?;
            let Some(line) = self.prompt("Enter your choice: ")? else {
                break;
            };

            match MenuChoice::parse(&line) {
                Some(MenuChoice::Exit) => {
                    writeln!(self.output, "Exiting system...")?;
                    break;
                }
                Some(choice) => self.dispatch(choice)?,
                None => writeln!(self.output, "Invalid choice.")?,
            }

            if self.input_closed {
                break;
            }
        }

        self.output.flush()?;
        Ok(())
    }

    /// Run a single menu action
    pub fn dispatch(&mut self, choice: MenuChoice) -> HotelResult<()> {
        log::debug!("Menu choice: {:?}", choice);

        match choice {
            MenuChoice::AddRoom => self.add_room(),
            MenuChoice::DisplayRooms => self.display_rooms(),
            MenuChoice::AllocateRoom => self.allocate_room(),
            MenuChoice::DeallocateRoom => self.deallocate_room(),
            MenuChoice::DisplayAllocations => self.display_allocations(),
            MenuChoice::Billing => self.billing(),
            MenuChoice::SaveSnapshot => self.save_snapshot(),
            MenuChoice::ShowSnapshot => self.show_snapshot(),
            MenuChoice::BackupAndClear => self.backup_and_clear(),
            MenuChoice::Exit => Ok(()),
        }
    }

    /// Print a prompt and read one trimmed line; `None` at end of input
    fn prompt(&mut self, label: &str) -> HotelResult<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            self.input_closed = true;
            writeln!(self.output)?;
            return Ok(None);
        }

        Ok(Some(line.trim().to_string()))
    }

    fn add_room(&mut self) -> HotelResult<()> {
        self.try_add_room()?;
        writeln!(self.output, "Price input attempt finished.\n")?;
        Ok(())
    }

    fn try_add_room(&mut self) -> HotelResult<()> {
        let Some(number) = self.prompt("Enter Room Number: ")? else {
            return Ok(());
        };

        if self.registry.contains(&number) {
            writeln!(self.output, "Room already exists.")?;
            return Ok(());
        }

        let Some(room_type) = self.prompt("Enter Room Type: ")? else {
            return Ok(());
        };
        let Some(rate) = self.prompt("Enter Room Price: ")? else {
            return Ok(());
        };

        let mut service =
            RoomService::new(&mut self.registry).with_strict_rates(self.strict_rates);
        match service.add_room(&number, &room_type, &rate) {
            Ok(_) => writeln!(self.output, "Room added successfully.")?,
            Err(HotelError::InvalidRate(_)) => writeln!(
                self.output,
                "Invalid input! Please enter a valid number for the price."
            )?,
            Err(HotelError::DuplicateKey(_)) => writeln!(self.output, "Room already exists.")?,
            Err(e) => writeln!(self.output, "Error: {}", e)?,
        }

        Ok(())
    }

    fn display_rooms(&mut self) -> HotelResult<()> {
        let service = RoomService::new(&mut self.registry);
        let listing = format_room_list(&service.list_rooms());
        write!(self.output, "{}", listing)?;
        Ok(())
    }

    fn allocate_room(&mut self) -> HotelResult<()> {
        self.try_allocate_room()?;
        writeln!(self.output, "Room allocation attempt complete.\n")?;
        Ok(())
    }

    fn try_allocate_room(&mut self) -> HotelResult<()> {
        let Some(number) = self.prompt("Enter Room Number to Allocate: ")? else {
            return Ok(());
        };

        let checked = RoomService::new(&mut self.registry)
            .ensure_free(&number)
            .map(|_| ());
        if let Err(e) = checked {
            return self.report_allocation_error(e);
        }

        let Some(guest) = self.prompt("Enter Guest Name: ")? else {
            return Ok(());
        };

        let result = RoomService::new(&mut self.registry).allocate(&number, &guest);
        match result {
            Ok(()) => writeln!(self.output, "Room {} allocated to {}.", number, guest)?,
            Err(e) => self.report_allocation_error(e)?,
        }

        Ok(())
    }

    fn report_allocation_error(&mut self, err: HotelError) -> HotelResult<()> {
        match err {
            HotelError::NotFound { .. } => {
                writeln!(self.output, "Error: Room number does not exist.")?
            }
            HotelError::AlreadyAllocated { .. } => {
                writeln!(self.output, "Room is already allocated.")?
            }
            other => writeln!(self.output, "Error: {}", other)?,
        }
        Ok(())
    }

    fn deallocate_room(&mut self) -> HotelResult<()> {
        self.try_deallocate_room()?;
        writeln!(self.output, "Room de-allocation attempt complete.\n")?;
        Ok(())
    }

    fn try_deallocate_room(&mut self) -> HotelResult<()> {
        let Some(number) = self.prompt("Enter Room Number to Deallocate: ")? else {
            return Ok(());
        };

        let result = RoomService::new(&mut self.registry).deallocate(&number);
        match result {
            Ok(guest) => writeln!(self.output, "Room {} de-allocated from {}.", number, guest)?,
            Err(HotelError::NotFound { .. }) => writeln!(self.output, "Room not found.")?,
            Err(HotelError::AlreadyFree(_)) => writeln!(self.output, "Room is already free.")?,
            Err(e) => writeln!(self.output, "Error: {}", e)?,
        }

        Ok(())
    }

    fn display_allocations(&mut self) -> HotelResult<()> {
        let service = RoomService::new(&mut self.registry);
        let listing = format_allocation_list(&service.list_allocated());
        write!(self.output, "{}", listing)?;
        Ok(())
    }

    fn billing(&mut self) -> HotelResult<()> {
        writeln!(
            self.output,
            "Billing Feature is Under Construction and will be added soon!"
        )?;
        Ok(())
    }

    fn save_snapshot(&mut self) -> HotelResult<()> {
        let result = self.snapshots.save(&self.registry);
        writeln!(self.output, "{}", save_status(&result))?;
        writeln!(self.output, "File save attempt completed.\n")?;
        Ok(())
    }

    fn show_snapshot(&mut self) -> HotelResult<()> {
        match self.snapshots.read() {
            Ok(content) => writeln!(self.output, "{}", content)?,
            Err(HotelError::NotFound { .. }) => writeln!(
                self.output,
                "File Error: File {} not found.",
                self.snapshots.path().display()
            )?,
            Err(e) => writeln!(self.output, "File Error: {}", e)?,
        }
        writeln!(self.output, "File read operation completed.\n")?;
        Ok(())
    }

    fn backup_and_clear(&mut self) -> HotelResult<()> {
        match self.backups.rotate() {
            Ok(RotateOutcome::NoSnapshot) => writeln!(self.output, "No file to backup.")?,
            Ok(RotateOutcome::Rotated { .. }) => {
                writeln!(self.output, "Backup completed. Original file cleared.")?
            }
            Err(HotelError::Backup(msg)) => writeln!(self.output, "Backup Error: {}", msg)?,
            Err(e) => writeln!(self.output, "Backup Error: {}", e)?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn run_menu(script: &str, temp: &TempDir) -> (String, RoomRegistry) {
        let paths = HotelPaths::with_base_dir(temp.path().to_path_buf());
        let mut output = Vec::new();

        let registry = {
            let mut menu = Menu::from_settings(
                Cursor::new(script.to_string()),
                &mut output,
                &paths,
                &Settings::default(),
            );
            menu.run().unwrap();
            menu.registry().clone()
        };

        (String::from_utf8(output).unwrap(), registry)
    }

    #[test]
    fn test_parse_choices() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::AddRoom));
        assert_eq!(MenuChoice::parse(" 10 "), Some(MenuChoice::BackupAndClear));
        assert_eq!(MenuChoice::parse("9"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("11"), None);
        assert_eq!(MenuChoice::parse(""), None);
    }

    #[test]
    fn test_save_status_messages() {
        assert_eq!(save_status(&Ok(2)), "Room allocation saved to file.");

        let denied = Err(HotelError::AccessDenied(
            "Access to the path 'lhms_12345.txt' is denied".into(),
        ));
        assert_eq!(
            save_status(&denied),
            "Access Denied: Access to the path 'lhms_12345.txt' is denied"
        );

        let other = Err(HotelError::Io("disk full".into()));
        assert_eq!(save_status(&other), "File Error: I/O error: disk full");
    }

    #[test]
    fn test_add_and_display() {
        let temp = TempDir::new().unwrap();
        let (out, registry) = run_menu("1\n101\nDeluxe\n100.0\n2\n9\n", &temp);

        assert!(out.contains("Room added successfully."));
        assert!(out.contains("Price input attempt finished."));
        assert!(out.contains("Room 101 - Deluxe - $100 - Available"));
        assert!(out.contains("Exiting system..."));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_duplicate_room_short_circuits() {
        let temp = TempDir::new().unwrap();
        let (out, registry) = run_menu("1\n101\nDeluxe\n100\n1\n101\n9\n", &temp);

        assert!(out.contains("Room already exists."));
        assert_eq!(out.matches("Price input attempt finished.").count(), 2);
        assert_eq!(registry.get("101").unwrap().room_type, "Deluxe");
    }

    #[test]
    fn test_invalid_price() {
        let temp = TempDir::new().unwrap();
        let (out, registry) = run_menu("1\n101\nDeluxe\nlots\n9\n", &temp);

        assert!(out.contains("Invalid input! Please enter a valid number for the price."));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_allocation_flow() {
        let temp = TempDir::new().unwrap();
        let script = "3\n404\n1\n101\nDeluxe\n100\n3\n101\nAlice\n3\n101\n5\n4\n101\n4\n101\n5\n9\n";
        let (out, registry) = run_menu(script, &temp);

        assert!(out.contains("Error: Room number does not exist."));
        assert!(out.contains("Room 101 allocated to Alice."));
        assert!(out.contains("Room is already allocated."));
        assert!(out.contains("Room 101 | Type: Deluxe | Price: 100 | Guest: Alice | Allocated: True"));
        assert!(out.contains("Room 101 de-allocated from Alice."));
        assert!(out.contains("Room is already free."));
        assert!(out.contains("No room allocations yet."));
        assert_eq!(out.matches("Room allocation attempt complete.").count(), 3);
        assert!(!registry.get("101").unwrap().is_allocated());
    }

    #[test]
    fn test_snapshot_and_backup_flow() {
        let temp = TempDir::new().unwrap();
        let script = "10\n8\n1\n101\nDeluxe\n100\n3\n101\nAlice\n7\n8\n10\n9\n";
        let (out, _) = run_menu(script, &temp);

        assert!(out.contains("No file to backup."));
        assert!(out.contains("File Error: File "));
        assert!(out.contains("Room allocation saved to file."));
        assert!(out.contains("File save attempt completed."));
        assert!(out.contains("--- Room Allocation Snapshot @ "));
        assert!(out.contains("Backup completed. Original file cleared."));
        assert_eq!(out.matches("File read operation completed.").count(), 2);

        let snapshot = fs::read_to_string(temp.path().join("lhms_12345.txt")).unwrap();
        assert!(snapshot.is_empty());

        let backup = fs::read_to_string(temp.path().join("lhms_12345_backup.txt")).unwrap();
        assert!(backup.contains("--- Backup @ "));
        assert!(backup.contains("Guest: Alice"));
    }

    #[test]
    fn test_invalid_choice_and_billing() {
        let temp = TempDir::new().unwrap();
        let (out, _) = run_menu("abc\n6\n9\n", &temp);

        assert!(out.contains("Invalid choice."));
        assert!(out.contains("Billing Feature is Under Construction"));
        assert_eq!(out.matches("--- Hotel Management System Menu ---").count(), 3);
    }

    #[test]
    fn test_end_of_input_stops_loop() {
        let temp = TempDir::new().unwrap();
        let (out, registry) = run_menu("1\n101\n", &temp);

        assert!(!out.contains("Exiting system..."));
        assert!(registry.is_empty());
    }
}
