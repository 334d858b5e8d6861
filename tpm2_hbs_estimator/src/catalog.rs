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

//! Hash-based signature parameter sets approved by NIST SP 800-208.
//!
//! Work factors are counted in SHA-256 compression calls, following the input layouts of
//! RFC 8554 (LMS) and RFC 8391 (XMSS):
//! * keygen builds every one-time key, its leaf and the whole Merkle tree;
//! * signing hashes the message and computes one one-time signature with worst-case chain
//!   lengths, the authentication path being kept from keygen.
//!
//! Entries sharing a friendly name differ by their Winternitz parameter.

use crate::types::HbsSchemeParams;

/// LMS with SHA-256 (M32 and M24) for every height and Winternitz width, then XMSS with SHA2-256
pub static NIST_APPROVED_PARAMETERS: &[HbsSchemeParams] = &[
    HbsSchemeParams::new("LMS_SHA256_M32_H5", 1, 5, 8684, 21310, 532),
    HbsSchemeParams::new("LMS_SHA256_M32_H5", 2, 5, 4460, 19262, 534),
    HbsSchemeParams::new("LMS_SHA256_M32_H5", 4, 5, 2348, 35486, 1074),
    HbsSchemeParams::new("LMS_SHA256_M32_H5", 8, 5, 1292, 279198, 8706),
    HbsSchemeParams::new("LMS_SHA256_M32_H10", 1, 10, 8844, 681982, 532),
    HbsSchemeParams::new("LMS_SHA256_M32_H10", 2, 10, 4620, 616446, 534),
    HbsSchemeParams::new("LMS_SHA256_M32_H10", 4, 10, 2508, 1135614, 1074),
    HbsSchemeParams::new("LMS_SHA256_M32_H10", 8, 10, 1452, 8934398, 8706),
    HbsSchemeParams::new("LMS_SHA256_M32_H15", 1, 15, 9004, 21823486, 532),
    HbsSchemeParams::new("LMS_SHA256_M32_H15", 2, 15, 4780, 19726334, 534),
    HbsSchemeParams::new("LMS_SHA256_M32_H15", 4, 15, 2668, 36339710, 1074),
    HbsSchemeParams::new("LMS_SHA256_M32_H15", 8, 15, 1612, 285900798, 8706),
    HbsSchemeParams::new("LMS_SHA256_M32_H20", 1, 20, 9164, 698351614, 532),
    HbsSchemeParams::new("LMS_SHA256_M32_H20", 2, 20, 4940, 631242750, 534),
    HbsSchemeParams::new("LMS_SHA256_M32_H20", 4, 20, 2828, 1162870782, 1074),
    HbsSchemeParams::new("LMS_SHA256_M32_H20", 8, 20, 1772, 9148825598, 8706),
    HbsSchemeParams::new("LMS_SHA256_M32_H25", 1, 25, 9324, 22347251710, 532),
    HbsSchemeParams::new("LMS_SHA256_M32_H25", 2, 25, 5100, 20199768062, 534),
    HbsSchemeParams::new("LMS_SHA256_M32_H25", 4, 25, 2988, 37211865086, 1074),
    HbsSchemeParams::new("LMS_SHA256_M32_H25", 8, 25, 1932, 292762419198, 8706),
    HbsSchemeParams::new("LMS_SHA256_M24_H5", 1, 5, 4956, 15326, 402),
    HbsSchemeParams::new("LMS_SHA256_M24_H5", 2, 5, 2580, 14270, 406),
    HbsSchemeParams::new("LMS_SHA256_M24_H5", 4, 5, 1380, 26846, 818),
    HbsSchemeParams::new("LMS_SHA256_M24_H5", 8, 5, 780, 213438, 6658),
    HbsSchemeParams::new("LMS_SHA256_M24_H10", 1, 10, 5076, 490494, 402),
    HbsSchemeParams::new("LMS_SHA256_M24_H10", 2, 10, 2700, 456702, 406),
    HbsSchemeParams::new("LMS_SHA256_M24_H10", 4, 10, 1500, 859134, 818),
    HbsSchemeParams::new("LMS_SHA256_M24_H10", 8, 10, 900, 6830078, 6658),
    HbsSchemeParams::new("LMS_SHA256_M24_H15", 1, 15, 5196, 15695870, 402),
    HbsSchemeParams::new("LMS_SHA256_M24_H15", 2, 15, 2820, 14614526, 406),
    HbsSchemeParams::new("LMS_SHA256_M24_H15", 4, 15, 1620, 27492350, 818),
    HbsSchemeParams::new("LMS_SHA256_M24_H15", 8, 15, 1020, 218562558, 6658),
    HbsSchemeParams::new("LMS_SHA256_M24_H20", 1, 20, 5316, 502267902, 402),
    HbsSchemeParams::new("LMS_SHA256_M24_H20", 2, 20, 2940, 467664894, 406),
    HbsSchemeParams::new("LMS_SHA256_M24_H20", 4, 20, 1740, 879755262, 818),
    HbsSchemeParams::new("LMS_SHA256_M24_H20", 8, 20, 1140, 6994001918, 6658),
    HbsSchemeParams::new("LMS_SHA256_M24_H25", 1, 25, 5436, 16072572926, 402),
    HbsSchemeParams::new("LMS_SHA256_M24_H25", 2, 25, 3060, 14965276670, 406),
    HbsSchemeParams::new("LMS_SHA256_M24_H25", 4, 25, 1860, 28152168446, 818),
    HbsSchemeParams::new("LMS_SHA256_M24_H25", 8, 25, 1260, 223808061438, 6658),
    HbsSchemeParams::new("XMSS-SHA2_10_256", 4, 10, 2500, 6929399, 6169),
    HbsSchemeParams::new("XMSS-SHA2_16_256", 4, 16, 2692, 443482103, 6169),
    HbsSchemeParams::new("XMSS-SHA2_20_256", 4, 20, 2820, 7095713783, 6169),
];

/// The built-in catalog
pub fn nist_approved_parameters() -> &'static [HbsSchemeParams] {
    NIST_APPROVED_PARAMETERS
}
