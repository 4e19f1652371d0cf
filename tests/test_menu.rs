use std::io::Cursor;

use parking_management::cli::menu::{Menu, MenuChoice};
use parking_management::domain::slot::SlotNumber;
use parking_management::domain::slot_allocator::SlotAllocator;
use parking_management::error::Error;

/// Runs the menu over `input` against a fresh lot and returns what it printed.
fn run_session(capacity: usize, input: &str) -> (String, SlotAllocator) {
    let mut lot = SlotAllocator::new(capacity).unwrap();
    let mut menu = Menu::new(Cursor::new(input.as_bytes()), Vec::new(), false);

    menu.run(&mut lot).unwrap();

    (String::from_utf8(menu.into_output()).unwrap(), lot)
}

#[test]
fn test_menu_choice_numbers() {
    assert_eq!(MenuChoice::from_number(1), Some(MenuChoice::Park));
    assert_eq!(MenuChoice::from_number(5), Some(MenuChoice::Exit));
    assert_eq!(MenuChoice::from_number(0), None);
    assert_eq!(MenuChoice::from_number(6), None);
}

#[test]
fn test_park_status_and_exit() {
    let input = "1\n KA01 \n Red \n1\nKA02\nBlue\n1\nKA03\nGreen\n2\n1\n1\nKA03\nGreen\n3\n5\n";
    let (output, lot) = run_session(2, input);

    assert!(output.contains("--- Parking Lot Menu ---"));
    assert!(output.contains("Allocated slot number: 1"));
    assert!(output.contains("Allocated slot number: 2"));
    assert!(output.contains("Sorry, parking lot is full."));
    assert!(output.contains("Slot number 1 is now free."));
    assert!(output.contains("Slot No.    Registration No    Color\n1          KA03              Green\n2          KA02              Blue\n"));
    assert!(output.ends_with("Exiting. Thank you!\n"));

    assert_eq!(lot.find_by_registration("KA03"), Ok(SlotNumber::new(1)));
}

#[test]
fn test_input_is_trimmed_before_parking() {
    let (_, lot) = run_session(2, "1\n  KA01\t\n  Red  \n5\n");

    let vehicle = lot.vehicle_at(SlotNumber::new(1)).unwrap();
    assert_eq!(vehicle.registration.as_str(), "KA01");
    assert_eq!(vehicle.color, "Red");
}

#[test]
fn test_bad_input_is_reported_and_reprompted() {
    let input = "abc\n9\n2\nseven\n2\n0\n2\n1\n5\n";
    let (output, _) = run_session(3, input);

    assert!(output.contains("Please enter a valid number."));
    assert!(output.contains("Invalid choice. Please choose a number between 1 and 5."));
    assert!(output.contains("Please enter a valid slot number."));
    assert!(output.contains("Invalid slot number! Slot should be between 1 and 3"));
    assert!(output.contains("Slot number 1 is already empty."));
    assert!(output.ends_with("Exiting. Thank you!\n"));
}

#[test]
fn test_find_and_duplicate_park_messages() {
    let input = "1\nKA01\nRed\n1\nKA01\nBlue\n4\nKA01\n4\nKA99\n3\n5\n";
    let (output, _) = run_session(3, input);

    assert!(output.contains("Vehicle is already parked in slot 1"));
    assert!(output.contains("Slot number: 1"));
    assert!(output.contains("Not found."));
    assert!(output.contains("1          KA01              Red"));
}

#[test]
fn test_empty_status_message() {
    let (output, _) = run_session(2, "3\n5\n");

    assert!(output.contains("Parking lot is empty."));
    assert!(!output.contains("Slot No."));
}

#[test]
fn test_end_of_input_stops_menu() {
    let (output, lot) = run_session(2, "1\nKA01\nRed\n1\nKA02");

    assert!(output.contains("Allocated slot number: 1"));
    assert!(!output.contains("Exiting"));
    assert_eq!(lot.occupied_count(), 1);
}

#[test]
fn test_prompt_capacity_retries_until_positive() {
    let mut menu = Menu::new(Cursor::new("zero\n0\n-4\n 4 \n".as_bytes()), Vec::new(), false);

    assert_eq!(menu.prompt_capacity().unwrap(), 4);

    let output = String::from_utf8(menu.into_output()).unwrap();
    assert_eq!(output.matches("Please enter a positive whole number.").count(), 3);
}

#[test]
fn test_prompt_capacity_fails_when_input_closes() {
    let mut menu = Menu::new(Cursor::new("".as_bytes()), Vec::new(), false);

    assert!(matches!(menu.prompt_capacity(), Err(Error::InputClosed)));
}

#[test]
fn test_largest_capacity_runs_a_session() {
    let mut menu = Menu::new(Cursor::new("18446744073709551615\n1\nKA01\nRed\n3\n5\n".as_bytes()), Vec::new(), false);

    let capacity = menu.prompt_capacity().unwrap();
    assert_eq!(capacity, usize::MAX);

    let mut lot = SlotAllocator::new(capacity).unwrap();
    menu.run(&mut lot).unwrap();

    let output = String::from_utf8(menu.into_output()).unwrap();
    assert!(output.contains("Allocated slot number: 1"));
    assert!(output.contains("1          KA01              Red"));
    assert!(output.ends_with("Exiting. Thank you!\n"));
}

#[test]
fn test_colored_outcomes() {
    // Output is not a terminal under test; force ANSI codes on.
    colored::control::set_override(true);

    let mut lot = SlotAllocator::new(1).unwrap();
    let mut menu = Menu::new(Cursor::new("1\nKA01\nRed\n1\nKA02\nBlue\n5\n".as_bytes()), Vec::new(), true);
    menu.run(&mut lot).unwrap();

    let output = String::from_utf8(menu.into_output()).unwrap();
    assert!(output.contains("\u{1b}[32mAllocated slot number: 1\u{1b}[0m\n"));
    assert!(output.contains("\u{1b}[31mSorry, parking lot is full.\u{1b}[0m\n"));
}
