pub mod profile;

pub use profile::{
    AwardEntry, EducationEntry, ExperienceEntry, LanguageEntry, Profile, ReferenceEntry,
};
