// ABOUTME: Fixed category tables for worker registration records
// ABOUTME: Education levels and specializations for each worker role
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Nurse education levels
pub const NURSE_EDUCATION: &[&str] = &["BSN", "MSN", "DNP", "ADN"];

/// Nurse specializations
pub const NURSE_SPECIALIZATIONS: &[&str] = &[
    "Pediatric Nursing",
    "Critical Care",
    "Emergency Care",
    "Surgical Nursing",
    "Geriatric Care",
    "Mental Health",
    "Oncology",
    "Cardiac Care",
];

/// Physiotherapist education levels
pub const PHYSIOTHERAPIST_EDUCATION: &[&str] = &["DPT", "MPT", "BPT", "Ph.D"];

/// Physiotherapist specializations
pub const PHYSIOTHERAPIST_SPECIALIZATIONS: &[&str] = &[
    "Sports Physiotherapy",
    "Neurological Physiotherapy",
    "Pediatric Physiotherapy",
    "Geriatric Physiotherapy",
    "Orthopedic Physiotherapy",
    "Cardiopulmonary Physiotherapy",
];

/// Counselor education levels
pub const COUNSELOR_EDUCATION: &[&str] = &["MSW", "Ph.D", "PsyD", "MA Psychology"];

/// Counselor specializations
pub const COUNSELOR_SPECIALIZATIONS: &[&str] = &[
    "Mental Health",
    "Family Counseling",
    "Addiction Counseling",
    "Trauma Counseling",
    "Child Psychology",
    "Behavioral Therapy",
];

/// Caretaker education levels (caretakers carry no specialization)
pub const CARETAKER_EDUCATION: &[&str] = &["BSN", "ADN", "CNA", "HHA"];
