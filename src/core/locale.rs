use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::utils::error::StorefrontError;

const MARATHI_MONTHS: [&str; 12] = [
    "जानेवारी",
    "फेब्रुवारी",
    "मार्च",
    "एप्रिल",
    "मे",
    "जून",
    "जुलै",
    "ऑगस्ट",
    "सप्टेंबर",
    "ऑक्टोबर",
    "नोव्हेंबर",
    "डिसेंबर",
];

const ENGLISH_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const DEVANAGARI_DIGITS: [char; 10] = ['०', '१', '२', '३', '४', '५', '६', '७', '८', '९'];

/// UI language of the storefront.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "mr-IN", alias = "mr")]
    Marathi,
    #[serde(rename = "en-IN", alias = "en")]
    English,
}

impl Locale {
    pub fn tag(&self) -> &'static str {
        match self {
            Locale::Marathi => "mr-IN",
            Locale::English => "en-IN",
        }
    }

    pub fn lang(&self) -> &'static str {
        match self {
            Locale::Marathi => "mr",
            Locale::English => "en",
        }
    }

    pub fn month_name(&self, month: u32) -> &'static str {
        let idx = (month.clamp(1, 12) - 1) as usize;
        match self {
            Locale::Marathi => MARATHI_MONTHS[idx],
            Locale::English => ENGLISH_MONTHS[idx],
        }
    }

    /// Renders a number with the locale's native digits.
    pub fn digits(&self, n: i64) -> String {
        let ascii = n.to_string();
        match self {
            Locale::Marathi => ascii
                .chars()
                .map(|c| {
                    c.to_digit(10)
                        .map(|d| DEVANAGARI_DIGITS[d as usize])
                        .unwrap_or(c)
                })
                .collect(),
            Locale::English => ascii,
        }
    }

    /// Long calendar date: `१५ मार्च, २०२४` / `15 March 2024`.
    pub fn long_date(&self, day: u32, month: u32, year: i32) -> String {
        let day = self.digits(i64::from(day));
        let year = self.digits(i64::from(year));
        match self {
            Locale::Marathi => format!("{} {}, {}", day, self.month_name(month), year),
            Locale::English => format!("{} {} {}", day, self.month_name(month), year),
        }
    }

    pub fn labels(&self) -> &'static Labels {
        match self {
            Locale::Marathi => &MARATHI_LABELS,
            Locale::English => &ENGLISH_LABELS,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Locale {
    type Err = StorefrontError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "mr" | "mr-in" => Ok(Locale::Marathi),
            "en" | "en-in" => Ok(Locale::English),
            other => Err(StorefrontError::InvalidConfigValueError {
                field: "locale".to_string(),
                value: other.to_string(),
                reason: "Supported locales: mr-IN, en-IN".to_string(),
            }),
        }
    }
}

/// Fixed UI strings for one locale.
#[derive(Debug)]
pub struct Labels {
    pub heading: &'static str,
    pub back: &'static str,
    pub latest: &'static str,
    pub read_more: &'static str,
    pub empty_title: &'static str,
    pub empty_subtitle: &'static str,
}

static MARATHI_LABELS: Labels = Labels {
    heading: "सर्व कृषी माहिती",
    back: "मुख्यपृष्ठ",
    latest: "नवीनतम",
    read_more: "संपूर्ण वाचा",
    empty_title: "अद्याप कृषी माहिती उपलब्ध नाही",
    empty_subtitle: "लवकरच आम्ही नवीन माहिती जोडू",
};

static ENGLISH_LABELS: Labels = Labels {
    heading: "All Farming Information",
    back: "Home",
    latest: "Latest",
    read_more: "Read more",
    empty_title: "No farming information available yet",
    empty_subtitle: "We will add new information soon",
};
