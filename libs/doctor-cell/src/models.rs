use std::collections::BTreeSet;
use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use shared_models::{ClinicError, ClinicResult};
use shared_utils::require_non_empty;

// ==============================================================================
// WEEKDAYS
// ==============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Parse a weekday token, ignoring case and surrounding whitespace.
    /// English names, English three-letter abbreviations and Spanish names
    /// (with or without accents) are accepted.
    pub fn parse(token: &str) -> ClinicResult<Self> {
        let normalized = token.trim().to_lowercase();
        let day = match normalized.as_str() {
            "monday" | "mon" | "lunes" => Weekday::Monday,
            "tuesday" | "tue" | "martes" => Weekday::Tuesday,
            "wednesday" | "wed" | "miercoles" | "miércoles" => Weekday::Wednesday,
            "thursday" | "thu" | "jueves" => Weekday::Thursday,
            "friday" | "fri" | "viernes" => Weekday::Friday,
            "saturday" | "sat" | "sabado" | "sábado" => Weekday::Saturday,
            "sunday" | "sun" | "domingo" => Weekday::Sunday,
            "" => return Err(ClinicError::InvalidData("weekday cannot be empty".into())),
            _ => {
                return Err(ClinicError::InvalidData(format!(
                    "unrecognised weekday {:?}",
                    token.trim()
                )))
            }
        };
        Ok(day)
    }

    pub fn of(date: NaiveDate) -> Self {
        date.weekday().into()
    }

    pub fn name(&self) -> &'static str {
        match self {
            Weekday::Monday => "monday",
            Weekday::Tuesday => "tuesday",
            Weekday::Wednesday => "wednesday",
            Weekday::Thursday => "thursday",
            Weekday::Friday => "friday",
            Weekday::Saturday => "saturday",
            Weekday::Sunday => "sunday",
        }
    }

    pub fn spanish_name(&self) -> &'static str {
        match self {
            Weekday::Monday => "lunes",
            Weekday::Tuesday => "martes",
            Weekday::Wednesday => "miércoles",
            Weekday::Thursday => "jueves",
            Weekday::Friday => "viernes",
            Weekday::Saturday => "sábado",
            Weekday::Sunday => "domingo",
        }
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Mon => Weekday::Monday,
            chrono::Weekday::Tue => Weekday::Tuesday,
            chrono::Weekday::Wed => Weekday::Wednesday,
            chrono::Weekday::Thu => Weekday::Thursday,
            chrono::Weekday::Fri => Weekday::Friday,
            chrono::Weekday::Sat => Weekday::Saturday,
            chrono::Weekday::Sun => Weekday::Sunday,
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ==============================================================================
// SPECIALTY
// ==============================================================================

/// A named service a doctor provides, with the weekdays it is offered.
/// Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Specialty {
    name: String,
    days: BTreeSet<Weekday>,
}

impl Specialty {
    /// Build a specialty from raw weekday tokens. Duplicate days collapse;
    /// an unrecognised token fails the whole construction.
    pub fn new<S: AsRef<str>>(name: &str, days: &[S]) -> ClinicResult<Self> {
        let name = require_non_empty("specialty name", name)?;
        let days = days
            .iter()
            .map(|token| Weekday::parse(token.as_ref()))
            .collect::<ClinicResult<BTreeSet<_>>>()?;
        Self::from_days(&name, days)
    }

    pub fn from_days<I>(name: &str, days: I) -> ClinicResult<Self>
    where
        I: IntoIterator<Item = Weekday>,
    {
        let specialty = Self {
            name: name.trim().to_string(),
            days: days.into_iter().collect(),
        };
        specialty.validate()?;
        Ok(specialty)
    }

    /// Re-check the construction invariants. Deserialized values bypass the
    /// constructors, so these are checked again when a doctor or specialty
    /// reaches the clinic.
    pub fn validate(&self) -> ClinicResult<()> {
        if self.name.trim().is_empty() {
            return Err(ClinicError::InvalidData("specialty name cannot be empty".into()));
        }
        if self.days.is_empty() {
            return Err(ClinicError::InvalidData(format!(
                "specialty {} needs at least one weekday",
                self.name
            )));
        }
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn days(&self) -> &BTreeSet<Weekday> {
        &self.days
    }

    pub fn offered_on(&self, day: Weekday) -> bool {
        self.days.contains(&day)
    }
}

// ==============================================================================
// DOCTOR
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    name: String,
    license: String,
    specialties: Vec<Specialty>,
}

impl Doctor {
    pub fn new(name: &str, license: &str) -> ClinicResult<Self> {
        Ok(Self {
            name: require_non_empty("doctor name", name)?,
            license: require_non_empty("license", license)?,
            specialties: Vec::new(),
        })
    }

    pub fn with_specialty(mut self, specialty: Specialty) -> ClinicResult<Self> {
        self.add_specialty(specialty)?;
        Ok(self)
    }

    /// Append a specialty. Names are matched exactly (case-sensitive) and the
    /// duplicate check runs before the specialty's own validation.
    pub fn add_specialty(&mut self, specialty: Specialty) -> ClinicResult<()> {
        if self.specialty(specialty.name()).is_some() {
            return Err(ClinicError::DuplicateSpecialty {
                license: self.license.clone(),
                specialty: specialty.name().to_string(),
            });
        }
        specialty.validate()?;
        self.specialties.push(specialty);
        Ok(())
    }

    /// Re-check what the constructors guarantee: non-blank name and license,
    /// unique specialty names, and every specialty well-formed.
    pub fn validate(&self) -> ClinicResult<()> {
        require_non_empty("doctor name", &self.name)?;
        require_non_empty("license", &self.license)?;
        for (index, specialty) in self.specialties.iter().enumerate() {
            if self.specialties[..index]
                .iter()
                .any(|earlier| earlier.name() == specialty.name())
            {
                return Err(ClinicError::DuplicateSpecialty {
                    license: self.license.clone(),
                    specialty: specialty.name().to_string(),
                });
            }
            specialty.validate()?;
        }
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn license(&self) -> &str {
        &self.license
    }

    pub fn specialties(&self) -> &[Specialty] {
        &self.specialties
    }

    pub fn specialty(&self, name: &str) -> Option<&Specialty> {
        self.specialties.iter().find(|s| s.name() == name)
    }

    pub fn specialties_on(&self, day: Weekday) -> impl Iterator<Item = &Specialty> {
        self.specialties.iter().filter(move |s| s.offered_on(day))
    }

    pub fn attends_on(&self, day: Weekday) -> bool {
        self.specialties_on(day).next().is_some()
    }
}
