//! The closed set of album list orderings accepted by getAlbumList(2)

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::operation::ValidationError;
use crate::params::keys;

/// Album list ordering (the `type` parameter)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ListType {
    Random,
    Newest,
    Highest,
    Frequent,
    Recent,
    AlphabeticalByName,
    AlphabeticalByArtist,
    Starred,
    /// Requires `fromYear` and `toYear`
    ByYear,
    /// Requires `genre`
    ByGenre,
}

impl ListType {
    pub const ALL: [ListType; 10] = [
        ListType::Random,
        ListType::Newest,
        ListType::Highest,
        ListType::Frequent,
        ListType::Recent,
        ListType::AlphabeticalByName,
        ListType::AlphabeticalByArtist,
        ListType::Starred,
        ListType::ByYear,
        ListType::ByGenre,
    ];

    /// Wire tag
    pub fn as_str(&self) -> &'static str {
        match self {
            ListType::Random => "random",
            ListType::Newest => "newest",
            ListType::Highest => "highest",
            ListType::Frequent => "frequent",
            ListType::Recent => "recent",
            ListType::AlphabeticalByName => "alphabeticalByName",
            ListType::AlphabeticalByArtist => "alphabeticalByArtist",
            ListType::Starred => "starred",
            ListType::ByYear => "byYear",
            ListType::ByGenre => "byGenre",
        }
    }

    /// Parameters that must be present for this ordering, in check order
    pub fn required_parameters(&self) -> &'static [&'static str] {
        match self {
            ListType::ByYear => &[keys::FROM_YEAR, keys::TO_YEAR],
            ListType::ByGenre => &[keys::GENRE],
            _ => &[],
        }
    }
}

impl FromStr for ListType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "random" => Ok(ListType::Random),
            "newest" => Ok(ListType::Newest),
            "highest" => Ok(ListType::Highest),
            "frequent" => Ok(ListType::Frequent),
            "recent" => Ok(ListType::Recent),
            "alphabeticalByName" => Ok(ListType::AlphabeticalByName),
            "alphabeticalByArtist" => Ok(ListType::AlphabeticalByArtist),
            "starred" => Ok(ListType::Starred),
            "byYear" => Ok(ListType::ByYear),
            "byGenre" => Ok(ListType::ByGenre),
            other => Err(ValidationError::InvalidListType {
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for ListType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether `input` names one of the ten list orderings
pub fn is_valid_list_type(input: &str) -> bool {
    input.parse::<ListType>().is_ok()
}
