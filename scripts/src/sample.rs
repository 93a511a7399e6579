//! Sample data inserted by the `seed` action.

pub struct SampleHorse {
    pub name: &'static str,
    pub breed: &'static str,
    pub age: i32,
    pub sex: &'static str,
    pub color: &'static str,
    pub health_status: &'static str,
    pub arrival_date: &'static str,
    pub notes: Option<&'static str>,
}

pub struct SampleRecord {
    /// Name of the owning horse in [`HORSES`]
    pub horse: &'static str,
    pub record_type: &'static str,
    pub description: &'static str,
    pub vet_name: &'static str,
    pub date: &'static str,
    pub next_followup: Option<&'static str>,
    pub notes: Option<&'static str>,
}

pub const HORSES: &[SampleHorse] = &[
    SampleHorse {
        name: "Thunder",
        breed: "Mustang",
        age: 22,
        sex: "Gelding",
        color: "Bay",
        health_status: "healthy",
        arrival_date: "2018-03-15",
        notes: Some("Very friendly, loves carrots."),
    },
    SampleHorse {
        name: "Belle",
        breed: "Arabian",
        age: 28,
        sex: "Mare",
        color: "Grey",
        health_status: "needs_attention",
        arrival_date: "2015-06-01",
        notes: Some("Heart murmur, monitor closely. Shy around strangers."),
    },
    SampleHorse {
        name: "Rusty",
        breed: "Quarter Horse",
        age: 30,
        sex: "Gelding",
        color: "Chestnut",
        health_status: "palliative",
        arrival_date: "2012-09-10",
        notes: Some("Cushings positive, on Prascend."),
    },
    SampleHorse {
        name: "Daisy",
        breed: "Thoroughbred",
        age: 18,
        sex: "Mare",
        color: "Dark Bay",
        health_status: "healthy",
        arrival_date: "2020-01-20",
        notes: None,
    },
    SampleHorse {
        name: "Scout",
        breed: "Paint",
        age: 25,
        sex: "Gelding",
        color: "Pinto",
        health_status: "critical",
        arrival_date: "2016-11-05",
        notes: Some("Kicks, approach with caution."),
    },
];

pub const MEDICAL_RECORDS: &[SampleRecord] = &[
    SampleRecord {
        horse: "Thunder",
        record_type: "checkup",
        description: "Annual wellness exam, all clear.",
        vet_name: "Dr. Martinez",
        date: "2025-11-01",
        next_followup: Some("2026-11-01"),
        notes: Some("Teeth in good shape."),
    },
    SampleRecord {
        horse: "Thunder",
        record_type: "vaccination",
        description: "Flu and tetanus booster.",
        vet_name: "Dr. Martinez",
        date: "2025-11-01",
        next_followup: Some("2026-11-01"),
        notes: None,
    },
    SampleRecord {
        horse: "Belle",
        record_type: "checkup",
        description: "Heart murmur evaluation.",
        vet_name: "Dr. Chen",
        date: "2025-10-15",
        next_followup: Some("2026-01-15"),
        notes: Some("Grade 2 murmur, stable."),
    },
    SampleRecord {
        horse: "Belle",
        record_type: "treatment",
        description: "Dental float procedure.",
        vet_name: "Dr. Chen",
        date: "2025-08-20",
        next_followup: None,
        notes: Some("Mild hooks corrected."),
    },
    SampleRecord {
        horse: "Rusty",
        record_type: "treatment",
        description: "Cushings blood panel and Prascend adjustment.",
        vet_name: "Dr. Patel",
        date: "2025-12-01",
        next_followup: Some("2026-03-01"),
        notes: Some("ACTH levels slightly elevated, increased dosage."),
    },
    SampleRecord {
        horse: "Rusty",
        record_type: "checkup",
        description: "Routine farrier and lameness check.",
        vet_name: "Dr. Patel",
        date: "2025-09-10",
        next_followup: None,
        notes: Some("Mild arthritis in front left."),
    },
    SampleRecord {
        horse: "Daisy",
        record_type: "vaccination",
        description: "West Nile and rabies vaccination.",
        vet_name: "Dr. Martinez",
        date: "2025-10-05",
        next_followup: Some("2026-10-05"),
        notes: None,
    },
    SampleRecord {
        horse: "Scout",
        record_type: "treatment",
        description: "Heaves management review.",
        vet_name: "Dr. Chen",
        date: "2025-11-20",
        next_followup: Some("2026-02-20"),
        notes: Some("Switched to soaked hay, improving."),
    },
];
