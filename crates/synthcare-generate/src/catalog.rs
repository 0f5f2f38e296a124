//! Table catalogs for the two dataset drivers.
//!
//! Each table is an ordered column-spec list; column order is CSV column
//! order. Reference columns (PatientID, ProviderID, VisitID) sample
//! uniformly from the referenced table's key range and are nullable like
//! any other data column; nothing checks them against generated rows.

use synthcare_core::{ColumnSpec, GeneratorConfig, Sampler, TableSpec};

pub const GENDERS: &[&str] = &["Male", "Female", "Other"];
pub const RACE_ETHNICITIES: &[&str] = &["White", "Black", "Asian", "Hispanic", "Other"];
pub const INSURANCE_TYPES: &[&str] = &["Private", "Medicaid", "Medicare", "Uninsured"];
pub const SPECIALTIES: &[&str] = &[
    "Primary Care",
    "Cardiology",
    "Oncology",
    "Pediatrics",
    "Emergency Medicine",
];
pub const DISPOSITIONS: &[&str] = &["Admitted", "Discharged", "Transferred"];
pub const FOLLOW_UP_STATUSES: &[&str] = &["Yes", "No"];
pub const CHRONIC_CONDITIONS: &[&str] = &[
    "Diabetes",
    "Hypertension",
    "Asthma",
    "COPD",
    "Arthritis",
    "Obesity",
];
pub const SDH_FACTORS: &[&str] = &[
    "Housing Instability",
    "Food Insecurity",
    "Transportation Issues",
    "Unemployment",
    "Low Income",
    "Education Barrier",
];
pub const SEVERITIES: &[&str] = &["Low", "Medium", "High"];
pub const BEHAVIORAL_DIAGNOSES: &[&str] = &[
    "Depression",
    "Anxiety",
    "Bipolar Disorder",
    "Substance Use Disorder",
    "PTSD",
    "Schizophrenia",
];
pub const METRIC_NAMES: &[&str] = &[
    "Medication Adherence",
    "Follow-Up Rate",
    "Preventive Screenings",
    "Care Plan Compliance",
    "Vaccination Rate",
];

/// Lookback window for Hospitalizations discharge anchors and the
/// this-year date columns.
pub const YEAR_DAYS: i64 = 365;
const DECADE_DAYS: i64 = 10 * YEAR_DAYS;
const FIVE_YEAR_DAYS: i64 = 5 * YEAR_DAYS;
const TWO_YEAR_DAYS: i64 = 2 * YEAR_DAYS;
const LIFETIME_DAYS: i64 = 90 * YEAR_DAYS;
const REASON_CODE_LEN: usize = 5;
const MAX_LIST_WORDS: usize = 3;

/// The six core tables, in generation and report order.
pub fn core_tables(config: &GeneratorConfig) -> Vec<TableSpec> {
    vec![
        patients(config),
        providers(config),
        primary_care_visits(config),
        emergency_visits(config),
        hospitalizations(config),
        referrals(config),
    ]
}

/// The four auxiliary tables.
pub fn auxiliary_tables(config: &GeneratorConfig) -> Vec<TableSpec> {
    vec![
        chronic_conditions(config),
        sdh(config),
        behavioral_health(config),
        quality_metrics(config),
    ]
}

fn patient_ref(config: &GeneratorConfig) -> Sampler {
    Sampler::IntRange {
        min: 1,
        max: config.patients as i64,
    }
}

fn provider_ref(config: &GeneratorConfig) -> Sampler {
    Sampler::IntRange {
        min: 1,
        max: config.providers as i64,
    }
}

fn patients(config: &GeneratorConfig) -> TableSpec {
    TableSpec::new(
        "Patients",
        config.patients,
        vec![
            ColumnSpec::key("PatientID"),
            ColumnSpec::new("FirstName", Sampler::FirstName),
            ColumnSpec::new("LastName", Sampler::LastName),
            ColumnSpec::new(
                "DateOfBirth",
                Sampler::DateWithin {
                    days_back: LIFETIME_DAYS,
                },
            ),
            ColumnSpec::new("Gender", Sampler::Choice(GENDERS)),
            ColumnSpec::new("RaceEthnicity", Sampler::Choice(RACE_ETHNICITIES)),
            ColumnSpec::new("Address", Sampler::StreetAddress),
            ColumnSpec::new("City", Sampler::City),
            ColumnSpec::new("State", Sampler::State),
            ColumnSpec::new("ZIPCode", Sampler::ZipCode),
            ColumnSpec::new("InsuranceType", Sampler::Choice(INSURANCE_TYPES)),
        ],
    )
}

fn providers(config: &GeneratorConfig) -> TableSpec {
    TableSpec::new(
        "Providers",
        config.providers,
        vec![
            ColumnSpec::key("ProviderID"),
            ColumnSpec::new("ProviderName", Sampler::FullName),
            ColumnSpec::new("Specialty", Sampler::Choice(SPECIALTIES)),
            ColumnSpec::new("ClinicName", Sampler::CompanyName),
            ColumnSpec::new("City", Sampler::City),
            ColumnSpec::new("State", Sampler::State),
            ColumnSpec::new("ZIPCode", Sampler::ZipCode),
        ],
    )
}

fn primary_care_visits(config: &GeneratorConfig) -> TableSpec {
    TableSpec::new(
        "PrimaryCareVisits",
        config.primary_care_visits,
        vec![
            ColumnSpec::key("VisitID"),
            ColumnSpec::new("PatientID", patient_ref(config)),
            ColumnSpec::new(
                "VisitDate",
                Sampler::DateWithin {
                    days_back: DECADE_DAYS,
                },
            ),
            ColumnSpec::new(
                "ReasonForVisit",
                Sampler::Code {
                    len: REASON_CODE_LEN,
                },
            ),
            ColumnSpec::new(
                "LabTestsOrdered",
                Sampler::WordList {
                    max: MAX_LIST_WORDS,
                },
            ),
            ColumnSpec::new(
                "MedicationsPrescribed",
                Sampler::WordList {
                    max: MAX_LIST_WORDS,
                },
            ),
            ColumnSpec::new("ProviderID", provider_ref(config)),
        ],
    )
}

fn emergency_visits(config: &GeneratorConfig) -> TableSpec {
    TableSpec::new(
        "EmergencyVisits",
        config.emergency_visits,
        vec![
            ColumnSpec::key("EmergencyVisitID"),
            ColumnSpec::new("PatientID", patient_ref(config)),
            ColumnSpec::new("VisitDate", Sampler::DateWithin { days_back: YEAR_DAYS }),
            ColumnSpec::new(
                "ReasonForVisit",
                Sampler::Code {
                    len: REASON_CODE_LEN,
                },
            ),
            ColumnSpec::new("ProviderID", provider_ref(config)),
            ColumnSpec::new("Disposition", Sampler::Choice(DISPOSITIONS)),
        ],
    )
}

fn hospitalizations(config: &GeneratorConfig) -> TableSpec {
    TableSpec::new(
        "Hospitalizations",
        config.hospitalizations,
        vec![
            ColumnSpec::key("HospitalizationID"),
            ColumnSpec::new("PatientID", patient_ref(config)),
            ColumnSpec::new(
                "AdmissionDate",
                Sampler::DateWithin { days_back: YEAR_DAYS },
            ),
            // Discharge is bounded by a fresh anchor, not by this row's
            // AdmissionDate, so it may precede the admission.
            ColumnSpec::new(
                "DischargeDate",
                Sampler::DateAfterAnchor {
                    anchor_days_back: YEAR_DAYS,
                },
            ),
            ColumnSpec::new(
                "ReasonForAdmission",
                Sampler::Code {
                    len: REASON_CODE_LEN,
                },
            ),
            ColumnSpec::new("ProviderID", provider_ref(config)),
        ],
    )
}

fn referrals(config: &GeneratorConfig) -> TableSpec {
    TableSpec::new(
        "Referrals",
        config.referrals,
        vec![
            ColumnSpec::key("ReferralID"),
            ColumnSpec::new("PatientID", patient_ref(config)),
            ColumnSpec::new("ReferringProviderID", provider_ref(config)),
            ColumnSpec::new("SpecialistProviderID", provider_ref(config)),
            ColumnSpec::new(
                "ReferralDate",
                Sampler::DateWithin { days_back: YEAR_DAYS },
            ),
            ColumnSpec::new(
                "ReasonForReferral",
                Sampler::Code {
                    len: REASON_CODE_LEN,
                },
            ),
            ColumnSpec::new("FollowUpCompleted", Sampler::Choice(FOLLOW_UP_STATUSES)),
        ],
    )
}

fn chronic_conditions(config: &GeneratorConfig) -> TableSpec {
    TableSpec::new(
        "ChronicConditions",
        config.chronic_conditions,
        vec![
            ColumnSpec::key("ConditionID"),
            ColumnSpec::new("PatientID", patient_ref(config)),
            ColumnSpec::new("Condition", Sampler::Choice(CHRONIC_CONDITIONS)),
            ColumnSpec::new(
                "DiagnosisDate",
                Sampler::DateWithin {
                    days_back: DECADE_DAYS,
                },
            ),
        ],
    )
}

fn sdh(config: &GeneratorConfig) -> TableSpec {
    TableSpec::new(
        "SDH",
        config.sdh_records,
        vec![
            ColumnSpec::key("SDHID"),
            ColumnSpec::new("PatientID", patient_ref(config)),
            ColumnSpec::new("Factor", Sampler::Choice(SDH_FACTORS)),
            ColumnSpec::new("Severity", Sampler::Choice(SEVERITIES)),
        ],
    )
}

fn behavioral_health(config: &GeneratorConfig) -> TableSpec {
    TableSpec::new(
        "BehavioralHealth",
        config.behavioral_health,
        vec![
            ColumnSpec::key("BehavioralHealthID"),
            ColumnSpec::new("PatientID", patient_ref(config)),
            ColumnSpec::new("Diagnosis", Sampler::Choice(BEHAVIORAL_DIAGNOSES)),
            ColumnSpec::new(
                "VisitDate",
                Sampler::DateWithin {
                    days_back: FIVE_YEAR_DAYS,
                },
            ),
        ],
    )
}

fn quality_metrics(config: &GeneratorConfig) -> TableSpec {
    TableSpec::new(
        "QualityMetrics",
        config.quality_metrics,
        vec![
            ColumnSpec::key("MetricID"),
            ColumnSpec::new(
                "VisitID",
                Sampler::IntRange {
                    min: 1,
                    max: config.primary_care_visits as i64,
                },
            ),
            ColumnSpec::new("MetricName", Sampler::Choice(METRIC_NAMES)),
            ColumnSpec::new("Score", Sampler::IntRange { min: 0, max: 100 }),
            ColumnSpec::new(
                "DateAssessed",
                Sampler::DateWithin {
                    days_back: TWO_YEAR_DAYS,
                },
            ),
        ],
    )
}
