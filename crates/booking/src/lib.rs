use chrono::{DateTime, NaiveDate, Utc};
use rand::Rng;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResortLocation {
    Knysna,
    PortElizabeth,
}

impl ResortLocation {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "knysna" => Some(Self::Knysna),
            "port elizabeth" => Some(Self::PortElizabeth),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Knysna => "Knysna",
            Self::PortElizabeth => "Port Elizabeth",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Room {
    BlueHut,
    LagoonHouseBoat,
    TropicalHouse,
}

impl Room {
    pub const ALL: [Room; 3] = [Room::BlueHut, Room::LagoonHouseBoat, Room::TropicalHouse];

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "blue hut" => Some(Self::BlueHut),
            "lagoon house boat" | "lagoon boat" => Some(Self::LagoonHouseBoat),
            "tropical house" => Some(Self::TropicalHouse),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::BlueHut => "Blue Hut",
            Self::LagoonHouseBoat => "Lagoon House Boat",
            Self::TropicalHouse => "Tropical House",
        }
    }

    pub fn capacity(self) -> u8 {
        match self {
            Self::BlueHut => 2,
            Self::LagoonHouseBoat => 4,
            Self::TropicalHouse => 8,
        }
    }

    pub fn nightly_rate(self) -> f64 {
        match self {
            Self::BlueHut => 450.0,
            Self::LagoonHouseBoat => 1200.0,
            Self::TropicalHouse => 2150.0,
        }
    }

    pub fn options_for(people: u8) -> Vec<Room> {
        match people {
            1..=2 => vec![Self::BlueHut, Self::LagoonHouseBoat],
            3..=4 => vec![Self::LagoonHouseBoat, Self::TropicalHouse],
            5..=8 => vec![Self::TropicalHouse],
            _ => Vec::new(),
        }
    }
}

#[derive(Debug, Error)]
pub enum FieldError {
    #[error("Please enter a valid location: Knysna or Port Elizabeth")]
    InvalidLocation,
    #[error("Please enter a valid number of people (1 to 8).")]
    InvalidPeople,
    #[error("Invalid room choice. Please choose one of the available rooms.")]
    InvalidRoom,
    #[error("Please enter a valid date in the format YYYY-MM-DD.")]
    InvalidDate,
    #[error("Please enter a valid number of nights.")]
    InvalidNights,
    #[error("Please enter a valid 10-digit contact number.")]
    InvalidContact,
    #[error("Please answer Yes or No.")]
    InvalidYesNo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStep {
    Location,
    People,
    RoomSelection,
    CheckInDate,
    TotalNights,
    Contact,
    Dietary,
    SpecificDietary,
    Confirm,
    Complete,
}

impl BookingStep {
    pub fn as_code(self) -> &'static str {
        match self {
            Self::Location => "location",
            Self::People => "people",
            Self::RoomSelection => "room_selection",
            Self::CheckInDate => "check_in_date",
            Self::TotalNights => "total_nights",
            Self::Contact => "contact",
            Self::Dietary => "dietary",
            Self::SpecificDietary => "specific_dietary",
            Self::Confirm => "confirm",
            Self::Complete => "complete",
        }
    }

    pub fn from_code(value: &str) -> Self {
        match value {
            "people" => Self::People,
            "room_selection" => Self::RoomSelection,
            "check_in_date" => Self::CheckInDate,
            "total_nights" => Self::TotalNights,
            "contact" => Self::Contact,
            "dietary" => Self::Dietary,
            "specific_dietary" => Self::SpecificDietary,
            "confirm" => Self::Confirm,
            "complete" => Self::Complete,
            _ => Self::Location,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookingData {
    pub location: Option<ResortLocation>,
    pub people: Option<u8>,
    pub room: Option<Room>,
    pub check_in: Option<NaiveDate>,
    pub nights: Option<u32>,
    pub contact: Option<String>,
    pub dietary: Option<String>,
    pub dietary_details: Option<String>,
}

impl BookingData {
    pub fn total_cost(&self) -> Option<f64> {
        match (self.room, self.nights) {
            (Some(room), Some(nights)) => Some(room.nightly_rate() * f64::from(nights)),
            _ => None,
        }
    }
}

/// One guest's pass through the linear booking form. Each `advance` call
/// validates the answer for the current step, stores it, and returns the
/// next prompts; invalid input re-prompts without moving on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingSession {
    pub booking_id: String,
    pub step: BookingStep,
    pub data: BookingData,
    pub updated_at: DateTime<Utc>,
}

impl BookingSession {
    pub fn new(booking_id: String) -> Self {
        Self {
            booking_id,
            step: BookingStep::Location,
            data: BookingData::default(),
            updated_at: Utc::now(),
        }
    }

    pub fn greeting() -> Vec<String> {
        vec![
            "Welcome to Blue Lagoon Resort! Please choose your desired resort location:"
                .to_string(),
            "Please reply with Knysna or Port Elizabeth".to_string(),
        ]
    }

    pub fn is_complete(&self) -> bool {
        self.step == BookingStep::Complete
    }

    pub fn advance(&mut self, input: &str) -> Vec<String> {
        self.updated_at = Utc::now();
        match self.step {
            BookingStep::Location => self.advance_location(input),
            BookingStep::People => self.advance_people(input),
            BookingStep::RoomSelection => self.advance_room(input),
            BookingStep::CheckInDate => self.advance_check_in(input),
            BookingStep::TotalNights => self.advance_nights(input),
            BookingStep::Contact => self.advance_contact(input),
            BookingStep::Dietary => self.advance_dietary(input),
            BookingStep::SpecificDietary => self.advance_specific_dietary(input),
            BookingStep::Confirm => self.advance_confirm(input),
            BookingStep::Complete => vec!["This booking is already confirmed.".to_string()],
        }
    }

    fn advance_location(&mut self, input: &str) -> Vec<String> {
        let Some(location) = ResortLocation::parse(input) else {
            return vec![FieldError::InvalidLocation.to_string()];
        };
        self.data.location = Some(location);
        self.step = BookingStep::People;
        vec!["How many people will be checking in?".to_string()]
    }

    fn advance_people(&mut self, input: &str) -> Vec<String> {
        let people = match input.trim().parse::<u8>() {
            Ok(value) if (1..=8).contains(&value) => value,
            _ => return vec![FieldError::InvalidPeople.to_string()],
        };
        self.data.people = Some(people);
        self.step = BookingStep::RoomSelection;

        let options = Room::options_for(people);
        let mut messages = rate_card();
        messages.push(availability_line(&options));
        messages.push(choice_line(&options));
        messages
    }

    fn advance_room(&mut self, input: &str) -> Vec<String> {
        let options = Room::options_for(self.data.people.unwrap_or(0));
        let room = match Room::parse(input) {
            Some(room) if options.contains(&room) => room,
            _ => return vec![FieldError::InvalidRoom.to_string()],
        };
        self.data.room = Some(room);
        self.step = BookingStep::CheckInDate;
        vec![
            format!("You have selected the {}.", room.label()),
            "Please provide the check-in date (YYYY-MM-DD).".to_string(),
        ]
    }

    fn advance_check_in(&mut self, input: &str) -> Vec<String> {
        let Ok(check_in) = NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d") else {
            return vec![FieldError::InvalidDate.to_string()];
        };
        self.data.check_in = Some(check_in);
        self.step = BookingStep::TotalNights;
        vec!["Please provide number of nights you wish to stay.".to_string()]
    }

    fn advance_nights(&mut self, input: &str) -> Vec<String> {
        let nights = match input.trim().parse::<u32>() {
            Ok(value) if value >= 1 => value,
            _ => return vec![FieldError::InvalidNights.to_string()],
        };
        self.data.nights = Some(nights);
        self.step = BookingStep::Contact;

        let mut messages = Vec::new();
        if let (Some(room), Some(total)) = (self.data.room, self.data.total_cost()) {
            messages.push(format!(
                "The total cost for {} nights in the {} is R{:.2}",
                nights,
                room.label(),
                total
            ));
        }
        messages.push("Please provide your contact information (Phone Number).".to_string());
        messages
    }

    fn advance_contact(&mut self, input: &str) -> Vec<String> {
        let pattern = Regex::new(r"^\d{10}$").expect("valid contact pattern");
        let contact = input.trim();
        if !pattern.is_match(contact) {
            return vec![FieldError::InvalidContact.to_string()];
        }
        self.data.contact = Some(contact.to_string());
        self.step = BookingStep::Dietary;
        vec!["Do you have any dietary requirements for food? (Yes/No)".to_string()]
    }

    fn advance_dietary(&mut self, input: &str) -> Vec<String> {
        let answer = input.trim().to_lowercase();
        self.data.dietary = Some(answer.clone());
        if answer == "yes" {
            self.step = BookingStep::SpecificDietary;
            vec!["Please specify your dietary requirements.".to_string()]
        } else {
            self.step = BookingStep::Confirm;
            self.summary_messages()
        }
    }

    fn advance_specific_dietary(&mut self, input: &str) -> Vec<String> {
        self.data.dietary_details = Some(input.trim().to_string());
        self.step = BookingStep::Confirm;
        self.summary_messages()
    }

    fn advance_confirm(&mut self, input: &str) -> Vec<String> {
        match input.trim().to_lowercase().as_str() {
            "yes" => {
                self.step = BookingStep::Complete;
                vec![
                    "Great! Thank you, your booking has been confirmed.".to_string(),
                    format!("Your Booking Reference Number: {}", reference_number()),
                ]
            }
            "no" => {
                self.step = BookingStep::Location;
                self.data = BookingData::default();
                let mut messages = vec![
                    "Please provide the correct information for any incorrect details."
                        .to_string(),
                ];
                messages.extend(Self::greeting());
                messages
            }
            _ => vec![FieldError::InvalidYesNo.to_string()],
        }
    }

    fn summary_messages(&self) -> Vec<String> {
        let data = &self.data;
        let mut messages = vec!["Thank you for providing the following information:".to_string()];

        messages.push(format!(
            "Location: {}",
            data.location.map_or("-", ResortLocation::label)
        ));
        messages.push(format!(
            "People: {}",
            data.people.map_or_else(|| "-".to_string(), |v| v.to_string())
        ));
        messages.push(format!(
            "Room: {}",
            data.room.map_or("-", Room::label)
        ));
        messages.push(format!(
            "Check-in Date: {}",
            data.check_in
                .map_or_else(|| "-".to_string(), |v| v.to_string())
        ));
        messages.push(format!(
            "Total Nights: {}",
            data.nights.map_or_else(|| "-".to_string(), |v| v.to_string())
        ));
        if let Some(total) = data.total_cost() {
            messages.push(format!("Total Cost: R{total:.2}"));
        }
        messages.push(format!(
            "Contact: {}",
            data.contact.as_deref().unwrap_or("-")
        ));
        messages.push(format!(
            "Dietary Requirements: {}",
            data.dietary.as_deref().unwrap_or("-")
        ));
        if let Some(details) = data.dietary_details.as_deref() {
            messages.push(format!("Specific Dietary Requirements: {details}"));
        }
        messages.push("Is the information correct? (Yes/No)".to_string());
        messages
    }
}

fn rate_card() -> Vec<String> {
    let mut messages = vec!["Here is a list of our rooms & rates:".to_string()];
    for room in Room::ALL {
        messages.push(format!(
            "{} | {} people | R{:.2} per night",
            room.label(),
            room.capacity(),
            room.nightly_rate()
        ));
    }
    messages
}

fn availability_line(options: &[Room]) -> String {
    let labels = options
        .iter()
        .map(|room| format!("'{}'", room.label()))
        .collect::<Vec<_>>()
        .join(" OR ");
    format!("The {labels} is available for you!")
}

fn choice_line(options: &[Room]) -> String {
    let labels = options
        .iter()
        .map(|room| format!("'{}'", room.label()))
        .collect::<Vec<_>>()
        .join(" OR ");
    format!("Please reply with {labels} to confirm your choice.")
}

fn reference_number() -> String {
    rand::rng().random_range(100_000..=999_999).to_string()
}
