//! Chess federation codes.

use serde::Serialize;

/// A national chess federation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Federation {
    /// Three-letter FIDE code
    pub code: &'static str,
    /// Country or territory name
    pub name: &'static str,
}

/// Resolves user input to a federation
pub trait FederationLookup {
    fn find(&self, code: &str) -> Option<&Federation>;
}

/// Built-in table of FIDE federations.
///
/// Lookup matches either the code or the full name, ignoring case and
/// surrounding whitespace.
#[derive(Debug, Clone, Copy, Default)]
pub struct Federations;

impl Federations {
    pub fn all() -> &'static [Federation] {
        FEDERATIONS
    }
}

impl FederationLookup for Federations {
    fn find(&self, code: &str) -> Option<&Federation> {
        let needle = code.trim();
        if needle.is_empty() {
            return None;
        }
        if needle.len() == 3 {
            if let Some(fed) = FEDERATIONS
                .iter()
                .find(|fed| fed.code.eq_ignore_ascii_case(needle))
            {
                return Some(fed);
            }
        }
        FEDERATIONS
            .iter()
            .find(|fed| fed.name.eq_ignore_ascii_case(needle))
    }
}

macro_rules! federations {
    ($($code:literal => $name:literal),* $(,)?) => {
        &[$(Federation { code: $code, name: $name }),*]
    };
}

static FEDERATIONS: &[Federation] = federations![
    "AFG" => "Afghanistan",
    "ALB" => "Albania",
    "ALG" => "Algeria",
    "AND" => "Andorra",
    "ANG" => "Angola",
    "ARG" => "Argentina",
    "ARM" => "Armenia",
    "AUS" => "Australia",
    "AUT" => "Austria",
    "AZE" => "Azerbaijan",
    "BAN" => "Bangladesh",
    "BAR" => "Barbados",
    "BEL" => "Belgium",
    "BIH" => "Bosnia and Herzegovina",
    "BLR" => "Belarus",
    "BOL" => "Bolivia",
    "BRA" => "Brazil",
    "BUL" => "Bulgaria",
    "CAN" => "Canada",
    "CHI" => "Chile",
    "CHN" => "China",
    "COL" => "Colombia",
    "CRC" => "Costa Rica",
    "CRO" => "Croatia",
    "CUB" => "Cuba",
    "CYP" => "Cyprus",
    "CZE" => "Czech Republic",
    "DEN" => "Denmark",
    "ECU" => "Ecuador",
    "EGY" => "Egypt",
    "ENG" => "England",
    "ESP" => "Spain",
    "EST" => "Estonia",
    "FAI" => "Faroe Islands",
    "FID" => "FIDE",
    "FIN" => "Finland",
    "FRA" => "France",
    "GEO" => "Georgia",
    "GER" => "Germany",
    "GRE" => "Greece",
    "GUE" => "Guernsey",
    "HKG" => "Hong Kong",
    "HUN" => "Hungary",
    "INA" => "Indonesia",
    "IND" => "India",
    "IRI" => "Iran",
    "IRL" => "Ireland",
    "IRQ" => "Iraq",
    "ISL" => "Iceland",
    "ISR" => "Israel",
    "ITA" => "Italy",
    "JAM" => "Jamaica",
    "JCI" => "Jersey",
    "JPN" => "Japan",
    "KAZ" => "Kazakhstan",
    "KEN" => "Kenya",
    "KGZ" => "Kyrgyzstan",
    "KOR" => "South Korea",
    "LAT" => "Latvia",
    "LIE" => "Liechtenstein",
    "LTU" => "Lithuania",
    "LUX" => "Luxembourg",
    "MAR" => "Morocco",
    "MAS" => "Malaysia",
    "MDA" => "Moldova",
    "MEX" => "Mexico",
    "MGL" => "Mongolia",
    "MKD" => "North Macedonia",
    "MLT" => "Malta",
    "MNC" => "Monaco",
    "MNE" => "Montenegro",
    "NED" => "Netherlands",
    "NGR" => "Nigeria",
    "NOR" => "Norway",
    "NZL" => "New Zealand",
    "PAK" => "Pakistan",
    "PAR" => "Paraguay",
    "PER" => "Peru",
    "PHI" => "Philippines",
    "POL" => "Poland",
    "POR" => "Portugal",
    "QAT" => "Qatar",
    "ROU" => "Romania",
    "RSA" => "South Africa",
    "RUS" => "Russia",
    "SCO" => "Scotland",
    "SGP" => "Singapore",
    "SLO" => "Slovenia",
    "SRB" => "Serbia",
    "SUI" => "Switzerland",
    "SVK" => "Slovakia",
    "SWE" => "Sweden",
    "SYR" => "Syria",
    "TJK" => "Tajikistan",
    "TKM" => "Turkmenistan",
    "TUN" => "Tunisia",
    "TUR" => "Turkey",
    "UAE" => "United Arab Emirates",
    "UGA" => "Uganda",
    "UKR" => "Ukraine",
    "URU" => "Uruguay",
    "USA" => "United States of America",
    "UZB" => "Uzbekistan",
    "VEN" => "Venezuela",
    "VIE" => "Vietnam",
    "WLS" => "Wales",
    "ZAM" => "Zambia",
    "ZIM" => "Zimbabwe",
];
