// Copyright 2025 Fondazione LINKS
 
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
 
//     http://www.apache.org/licenses/LICENSE-2.0
 
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::{fmt::Display, str::FromStr};

use crate::error::EstimateError;

/// Order of the rows of a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey{
    /// By friendly name, then by Winternitz parameter
    Name,
    /// By signature size
    Size,
    /// By signing work
    Signing,
    /// By key generation work
    #[default]
    Keygen
}

impl FromStr for SortKey{
    type Err = EstimateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(SortKey::Name),
            "size" => Ok(SortKey::Size),
            "signing" => Ok(SortKey::Signing),
            "keygen" => Ok(SortKey::Keygen),
            any => Err(EstimateError::Configuration(
                format!("unknown sort_by value: '{any}' (options are keygen, signing, size, name)")))
        }
    }
}

impl Display for SortKey{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortKey::Name => f.write_str("name"),
            SortKey::Size => f.write_str("size"),
            SortKey::Signing => f.write_str("signing"),
            SortKey::Keygen => f.write_str("keygen")
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use crate::error::EstimateError;

    use super::SortKey;

    #[test]
    fn parse_known_keys(){
        for key in [SortKey::Name, SortKey::Size, SortKey::Signing, SortKey::Keygen] {
            assert_eq!(SortKey::from_str(&key.to_string()), Ok(key));
        }
    }

    #[test]
    fn default_is_keygen(){
        assert_eq!(SortKey::default(), SortKey::Keygen);
    }

    #[test]
    fn unknown_key(){
        let key = SortKey::from_str("speed");
        assert_eq!(key, Err(EstimateError::Configuration(
            "unknown sort_by value: 'speed' (options are keygen, signing, size, name)".to_owned())));
    }

    #[test]
    fn keys_are_case_sensitive(){
        assert!(SortKey::from_str("Keygen").is_err());
    }
}
