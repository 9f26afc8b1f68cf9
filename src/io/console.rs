//! Interactive attendant console
//!
//! Minimal text interface over the controller: a three-choice menu that
//! always returns to itself. Every operation failure is surfaced as a
//! message and the loop continues; nothing here is fatal to the process.

use crate::domain::error::ParkingError;
use crate::domain::session::DISPLAY_TIME_FORMAT;
use crate::services::controller::ParkingController;
use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::debug;

pub struct Console {
    controller: Arc<ParkingController>,
    facility_name: String,
    currency_prefix: String,
}

impl Console {
    pub fn new(
        controller: Arc<ParkingController>,
        facility_name: &str,
        currency_prefix: &str,
    ) -> Self {
        Self {
            controller,
            facility_name: facility_name.to_string(),
            currency_prefix: currency_prefix.to_string(),
        }
    }

    /// Run the menu loop until the operator quits or stdin closes
    pub async fn run(&self) -> anyhow::Result<()> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        loop {
            println!("\n=== {} ===", self.facility_name);
            println!("1. Vehicle Entry");
            println!("2. Vehicle Exit");
            println!("3. Exit Program");

            let Some(choice) = prompt(&mut lines, "Enter your choice (1-3): ").await? else {
                debug!("console_stdin_closed");
                return Ok(());
            };

            match choice.trim() {
                "1" => {
                    if self.handle_entry(&mut lines).await?.is_none() {
                        return Ok(());
                    }
                }
                "2" => {
                    if self.handle_exit(&mut lines).await?.is_none() {
                        return Ok(());
                    }
                }
                "3" => {
                    println!("Thank you for using {}!", self.facility_name);
                    return Ok(());
                }
                _ => println!("Invalid choice. Please try again."),
            }
        }
    }

    /// Entry flow; `Ok(None)` means stdin closed
    async fn handle_entry(&self, lines: &mut Lines<BufReader<Stdin>>) -> anyhow::Result<Option<()>> {
        println!("\n=== VEHICLE ENTRY ===");

        let Some(name) = prompt(lines, "Enter your name: ").await? else {
            return Ok(None);
        };
        let Some(vehicle) = prompt(lines, "Enter vehicle number: ").await? else {
            return Ok(None);
        };

        match self.controller.check_in(name.trim(), &vehicle).await {
            Ok(receipt) => {
                println!("\nEntry recorded!");
                println!("Session ID: {}", receipt.session_id);
                println!("Entry Time: {}", receipt.entry_time.format(DISPLAY_TIME_FORMAT));
            }
            Err(e) => println!("{}", entry_failure_message(&e)),
        }

        Ok(Some(()))
    }

    /// Exit flow; `Ok(None)` means stdin closed
    async fn handle_exit(&self, lines: &mut Lines<BufReader<Stdin>>) -> anyhow::Result<Option<()>> {
        println!("\n=== VEHICLE EXIT ===");

        let Some(vehicle) = prompt(lines, "Enter vehicle number: ").await? else {
            return Ok(None);
        };

        match self.controller.check_out(&vehicle).await {
            Ok(bill) => {
                println!("\n=== PARKING BILL ===");
                println!("Name: {}", bill.owner_name);
                println!("Vehicle Number: {}", bill.vehicle_number);
                println!("Entry Time: {}", bill.entry_time.format(DISPLAY_TIME_FORMAT));
                println!("Exit Time: {}", bill.exit_time.format(DISPLAY_TIME_FORMAT));
                println!("Duration: {} hours {} minutes", bill.whole_hours, bill.whole_minutes);
                println!("Charges: {}{}", self.currency_prefix, bill.fee);
            }
            Err(e) => println!("{}", exit_failure_message(&e)),
        }

        Ok(Some(()))
    }
}

/// Print a prompt and read one line; `None` when stdin is closed
async fn prompt(
    lines: &mut Lines<BufReader<Stdin>>,
    text: &str,
) -> anyhow::Result<Option<String>> {
    print!("{text}");
    std::io::stdout().flush()?;
    Ok(lines.next_line().await?)
}

fn entry_failure_message(error: &ParkingError) -> String {
    match error {
        ParkingError::IdentityCaptureFailed => {
            "Face detection failed. Try again.".to_string()
        }
        ParkingError::DuplicateSession(_) => {
            "Entry already recorded for this vehicle this second. Try again.".to_string()
        }
        other => format!("Entry failed: {other}"),
    }
}

fn exit_failure_message(error: &ParkingError) -> String {
    match error {
        ParkingError::IdentityCaptureFailed => {
            "Face detection failed. Try again.".to_string()
        }
        ParkingError::NoMatchingSession(_) => "No matching session found.".to_string(),
        ParkingError::IdentityMismatch { .. } => {
            "Face verification failed. Contact parking attendant.".to_string()
        }
        other => format!("Exit failed: {other}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{SessionId, VehicleNumber};

    #[test]
    fn test_entry_failure_messages() {
        assert_eq!(
            entry_failure_message(&ParkingError::IdentityCaptureFailed),
            "Face detection failed. Try again."
        );

        let dup = ParkingError::DuplicateSession(SessionId("KA01_20250314090000".to_string()));
        assert!(entry_failure_message(&dup).contains("Try again"));
    }

    #[test]
    fn test_exit_failure_messages() {
        let missing = ParkingError::NoMatchingSession(VehicleNumber::new("KA01AB1234"));
        assert_eq!(exit_failure_message(&missing), "No matching session found.");

        let mismatch = ParkingError::IdentityMismatch {
            vehicle: VehicleNumber::new("KA01AB1234"),
            distance: 250.0,
        };
        assert_eq!(
            exit_failure_message(&mismatch),
            "Face verification failed. Contact parking attendant."
        );
    }
}
