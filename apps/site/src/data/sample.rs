use crate::models::{
    AwardEntry, EducationEntry, ExperienceEntry, LanguageEntry, Profile, ReferenceEntry,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Built-in profile served when no PROFILE_PATH is configured.
pub fn sample_profile() -> Profile {
    Profile {
        name: "Nurul Aina Hamid".to_string(),
        title: "Accounts Executive".to_string(),
        tagline: "Accurate books, clean audits and month-end closes that land on time."
            .to_string(),
        summary: "Accounts executive with six years across audit and in-house finance. \
                  Comfortable owning the full cycle from daily postings to statutory \
                  reporting, and happiest when a messy ledger becomes a tidy one."
            .to_string(),
        location: "Petaling Jaya, Selangor".to_string(),
        phone: "+60 12-481 2276".to_string(),
        email: "nurul.aina@example.com".to_string(),
        linkedin: "https://www.linkedin.com/in/nurul-aina-hamid".to_string(),
        highlights: strings(&[
            "Microsoft Excel",
            "Microsoft Word",
            "SQL Accounting",
            "Audit Express",
            "Budgeting",
            "Financial Reporting",
        ]),
        experience: vec![
            ExperienceEntry {
                role: "Accounts Executive".to_string(),
                company: "Seri Mutiara Logistics Sdn Bhd".to_string(),
                location: "Shah Alam".to_string(),
                period: "2022 – Present".to_string(),
                bullets: strings(&[
                    "Run the monthly close for three entities, cutting close time from 9 to 6 working days",
                    "Prepare bank and intercompany reconciliations in SQL Accounting",
                    "Coordinate year-end audit schedules with external auditors",
                ]),
            },
            ExperienceEntry {
                role: "Audit Associate".to_string(),
                company: "Tan, Lim & Partners".to_string(),
                location: "Kuala Lumpur".to_string(),
                period: "2019 – 2022".to_string(),
                bullets: strings(&[
                    "Performed statutory audits for SME clients in trading and manufacturing",
                    "Built working papers in Audit Express and drafted management letters",
                ]),
            },
            ExperienceEntry {
                role: "Finance Intern".to_string(),
                company: "Kedai Buku Cahaya".to_string(),
                location: "Ipoh".to_string(),
                period: "2018".to_string(),
                bullets: strings(&["Maintained the fixed asset register and petty cash book"]),
            },
        ],
        skills: strings(&[
            "Month-end close",
            "Bank reconciliation",
            "Statutory audit",
            "SST filing",
            "Payroll",
            "Management reporting",
            "Pivot tables",
        ]),
        education: vec![
            EducationEntry {
                program: "Bachelor of Accountancy (Hons)".to_string(),
                school: "Universiti Teknologi MARA".to_string(),
                detail: "CGPA 3.62, Dean's List x4".to_string(),
                period: "2015 – 2019".to_string(),
            },
            EducationEntry {
                program: "Foundation in Business".to_string(),
                school: "Kolej Matrikulasi Perak".to_string(),
                detail: "Accounting stream".to_string(),
                period: "2014 – 2015".to_string(),
            },
        ],
        awards: vec![
            AwardEntry {
                title: "Employee of the Quarter".to_string(),
                org: "Seri Mutiara Logistics".to_string(),
                year: "2023".to_string(),
            },
            AwardEntry {
                title: "Dean's List".to_string(),
                org: "Universiti Teknologi MARA".to_string(),
                year: "2016 – 2019".to_string(),
            },
        ],
        languages: vec![
            LanguageEntry {
                name: "Malay".to_string(),
                level: "Native".to_string(),
            },
            LanguageEntry {
                name: "English".to_string(),
                level: "Professional".to_string(),
            },
            LanguageEntry {
                name: "Mandarin".to_string(),
                level: "Conversational".to_string(),
            },
        ],
        references: vec![
            ReferenceEntry {
                name: "Mr. Lim Boon Keat".to_string(),
                role: "Audit Partner, Tan, Lim & Partners".to_string(),
                phone: "+60 3-2141 0092".to_string(),
                email: "bk.lim@example.com".to_string(),
            },
            ReferenceEntry {
                name: "Pn. Rozita Osman".to_string(),
                role: "Finance Manager, Seri Mutiara Logistics".to_string(),
                phone: "+60 19-330 4417".to_string(),
                email: "rozita.osman@example.com".to_string(),
            },
        ],
    }
}
