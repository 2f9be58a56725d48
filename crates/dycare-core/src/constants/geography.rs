// ABOUTME: Mumbai locality base points and person-name pools for synthetic records
// ABOUTME: Base points are perturbed by the generator; names are combined first + last
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// A base point for location sampling
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Locality {
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
}

/// Mumbai area base points with approximate coordinates
pub const MUMBAI_LOCALITIES: &[Locality] = &[
    // Thane
    Locality {
        latitude: 19.2183,
        longitude: 72.9781,
    },
    // Dadar
    Locality {
        latitude: 19.0178,
        longitude: 72.8478,
    },
    // Churchgate
    Locality {
        latitude: 18.9322,
        longitude: 72.8264,
    },
    // Chembur
    Locality {
        latitude: 19.0522,
        longitude: 72.8994,
    },
    // Andheri
    Locality {
        latitude: 19.1136,
        longitude: 72.8697,
    },
    // Bandra
    Locality {
        latitude: 19.0596,
        longitude: 72.8295,
    },
    // Powai
    Locality {
        latitude: 19.1176,
        longitude: 72.9060,
    },
    // Mulund
    Locality {
        latitude: 19.1662,
        longitude: 72.9538,
    },
];

/// Given names
pub const FIRST_NAMES: &[&str] = &[
    "Aarav", "Aditi", "Ananya", "Arjun", "Diya", "Ishaan", "Kabir", "Kavya", "Meera", "Neha",
    "Nikhil", "Pooja", "Priya", "Rahul", "Riya", "Rohan", "Saanvi", "Sanjay", "Shreya", "Vikram",
    "Anita", "Deepak", "Farhan", "Zara", "Tanvi", "Manoj", "Lakshmi", "Suresh", "Harini", "Yusuf",
];

/// Family names
pub const LAST_NAMES: &[&str] = &[
    "Sharma", "Patel", "Iyer", "Reddy", "Nair", "Gupta", "Desai", "Kulkarni", "Joshi", "Mehta",
    "Chopra", "Kapoor", "Menon", "Rao", "Bose", "Banerjee", "Shah", "Pillai", "Khan", "Fernandes",
    "Sinha", "Verma", "Malhotra", "Chatterjee", "Naidu", "Gill", "Das", "Bhat", "Pawar", "Shetty",
];
