//! Built-in catalog data.
//!
//! The symptom, condition, and provider tables ship in code; a deployment
//! with its own catalog source constructs the catalogs from its own lists
//! instead.

use crate::models::{Condition, Provider, Symptom};

/// Default symptom list, grouped by medical category.
pub(super) fn default_symptoms() -> Vec<Symptom> {
    vec![
        // General symptoms
        Symptom::new("gen-1", "Fever", "General", "Elevated body temperature above 98.6\u{b0}F (37\u{b0}C)"),
        Symptom::new("gen-2", "Fatigue", "General", "Feeling of tiredness or exhaustion"),
        Symptom::new("gen-3", "Weakness", "General", "Lack of physical or muscle strength"),
        Symptom::new("gen-4", "Sweating", "General", "Excessive perspiration"),
        Symptom::new("gen-5", "Weight loss", "General", "Unintentional decrease in body weight"),
        Symptom::new("gen-6", "Weight gain", "General", "Unintentional increase in body weight"),
        // Respiratory symptoms
        Symptom::new("resp-1", "Cough", "Respiratory", "Sudden expulsion of air from the lungs"),
        Symptom::new("resp-2", "Shortness of breath", "Respiratory", "Difficulty breathing or dyspnea"),
        Symptom::new("resp-3", "Wheezing", "Respiratory", "High-pitched whistling sound during breathing"),
        Symptom::new("resp-4", "Chest congestion", "Respiratory", "Feeling of tightness or mucus in chest"),
        Symptom::new("resp-5", "Sore throat", "Respiratory", "Pain or irritation in the throat"),
        Symptom::new("resp-6", "Runny nose", "Respiratory", "Excess discharge of fluid from the nose"),
        // Cardiovascular symptoms
        Symptom::new("cardio-1", "Chest pain", "Cardiovascular", "Discomfort or pain in the chest area"),
        Symptom::new("cardio-2", "Palpitations", "Cardiovascular", "Sensation of rapid or irregular heartbeat"),
        Symptom::new("cardio-3", "Swelling in legs", "Cardiovascular", "Edema in the lower extremities"),
        Symptom::new("cardio-4", "High blood pressure", "Cardiovascular", "Elevated blood pressure readings"),
        Symptom::new("cardio-5", "Low blood pressure", "Cardiovascular", "Decreased blood pressure readings"),
        // Neurological symptoms
        Symptom::new("neuro-1", "Headache", "Neurological", "Pain in any region of the head"),
        Symptom::new("neuro-2", "Dizziness", "Neurological", "Feeling of lightheadedness or imbalance"),
        Symptom::new("neuro-3", "Confusion", "Neurological", "Inability to think clearly or understand"),
        Symptom::new("neuro-4", "Memory problems", "Neurological", "Difficulty in recalling information"),
        Symptom::new("neuro-5", "Numbness", "Neurological", "Loss of sensation in a body part"),
        Symptom::new("neuro-6", "Seizures", "Neurological", "Sudden, uncontrolled electrical disturbance in the brain"),
        // Gastrointestinal symptoms
        Symptom::new("gi-1", "Nausea", "Gastrointestinal", "Feeling of sickness with an inclination to vomit"),
        Symptom::new("gi-2", "Vomiting", "Gastrointestinal", "Forceful expulsion of stomach contents"),
        Symptom::new("gi-3", "Diarrhea", "Gastrointestinal", "Loose, watery stools"),
        Symptom::new("gi-4", "Constipation", "Gastrointestinal", "Difficulty in passing stool"),
        Symptom::new("gi-5", "Abdominal pain", "Gastrointestinal", "Pain in the abdomen or stomach area"),
        Symptom::new("gi-6", "Bloating", "Gastrointestinal", "Feeling of fullness or swelling in the abdomen"),
        // Musculoskeletal symptoms
        Symptom::new("ms-1", "Joint pain", "Musculoskeletal", "Pain in one or more joints"),
        Symptom::new("ms-2", "Muscle pain", "Musculoskeletal", "Pain in one or more muscles"),
        Symptom::new("ms-3", "Back pain", "Musculoskeletal", "Pain in the back"),
        Symptom::new("ms-4", "Neck pain", "Musculoskeletal", "Pain in the neck area"),
        Symptom::new("ms-5", "Stiffness", "Musculoskeletal", "Reduced range of motion"),
        // Dermatological symptoms
        Symptom::new("derm-1", "Rash", "Dermatological", "Abnormal change in skin color or texture"),
        Symptom::new("derm-2", "Itching", "Dermatological", "Irritating sensation causing desire to scratch"),
        Symptom::new("derm-3", "Dry skin", "Dermatological", "Skin that lacks moisture"),
        Symptom::new("derm-4", "Excessive sweating", "Dermatological", "Hyperhidrosis or abnormal sweating"),
        Symptom::new("derm-5", "Hair loss", "Dermatological", "Loss of hair from the scalp or body"),
    ]
}

fn condition(
    id: &str,
    name: &str,
    description: &str,
    specialist: &str,
    characteristic_symptoms: &[&str],
    calibration: f64,
) -> Condition {
    Condition {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        specialist: specialist.to_string(),
        characteristic_symptoms: characteristic_symptoms.iter().map(|s| s.to_string()).collect(),
        calibration,
    }
}

/// Default condition list with per-condition calibration factors.
pub(super) fn default_conditions() -> Vec<Condition> {
    vec![
        condition(
            "common-cold",
            "Common Cold",
            "A viral infection of the upper respiratory tract that primarily affects the nose and throat.",
            "General Physician",
            &["resp-1", "resp-5", "resp-6", "gen-1", "resp-2"],
            0.8,
        ),
        condition(
            "flu",
            "Influenza",
            "A contagious respiratory illness caused by influenza viruses that infect the nose, throat, and lungs.",
            "General Physician",
            &["gen-1", "gen-2", "resp-1", "resp-2", "ms-2"],
            0.85,
        ),
        condition(
            "allergies",
            "Seasonal Allergies",
            "An immune system response to allergens like pollen, dust, or pet dander.",
            "Allergist",
            &["resp-6", "resp-5", "resp-3", "derm-2", "resp-1"],
            0.7,
        ),
        condition(
            "migraine",
            "Migraine",
            "A neurological condition that causes severe, recurring headaches, often with other symptoms.",
            "Neurologist",
            &["neuro-1", "neuro-2", "gi-1"],
            0.9,
        ),
        condition(
            "gerd",
            "Gastroesophageal Reflux Disease",
            "A digestive disorder that affects the ring of muscle between the esophagus and stomach.",
            "Gastroenterologist",
            &["gi-1", "gi-5", "cardio-1"],
            0.75,
        ),
        condition(
            "asthma",
            "Asthma",
            "A condition in which airways narrow and swell and may produce extra mucus.",
            "Pulmonologist",
            &["resp-2", "resp-3", "resp-1", "resp-4"],
            0.8,
        ),
        condition(
            "arthritis",
            "Arthritis",
            "Inflammation of one or more joints, causing pain and stiffness.",
            "Rheumatologist",
            &["ms-1", "ms-5", "gen-2"],
            0.7,
        ),
        condition(
            "hypertension",
            "Hypertension",
            "High blood pressure is a common condition that can lead to serious health problems.",
            "Cardiologist",
            &["cardio-4", "neuro-1", "cardio-3"],
            0.7,
        ),
    ]
}

fn provider(
    id: &str,
    name: &str,
    specialty: &str,
    affiliation: &str,
    location_label: &str,
    address: &str,
    contact: &str,
    map_link: &str,
) -> Provider {
    Provider {
        id: id.to_string(),
        name: name.to_string(),
        specialty: specialty.to_string(),
        affiliation: affiliation.to_string(),
        location_label: location_label.to_string(),
        address: address.to_string(),
        contact: contact.to_string(),
        map_link: Some(map_link.to_string()),
    }
}

/// Default provider directory (Chennai-area specialists).
pub(crate) fn default_providers() -> Vec<Provider> {
    vec![
        provider(
            "doc-1",
            "Dr. Ramesh Kumar",
            "Cardiologist",
            "Apollo Hospital",
            "Chennai",
            "21, Greams Lane, Chennai, 600006",
            "+91 44 2829 3333",
            "https://maps.app.goo.gl/5JKcLZX3bZX4LQyZ6",
        ),
        provider(
            "doc-2",
            "Dr. Lakshmi Narayanan",
            "Cardiologist",
            "Fortis Malar Hospital",
            "Chennai",
            "52, 1st Main Rd, Gandhi Nagar, Chennai, 600020",
            "+91 44 4289 2222",
            "https://maps.app.goo.gl/cQV9BdZp7xTnpzny8",
        ),
        provider(
            "doc-3",
            "Dr. Priya Rajendran",
            "Neurologist",
            "Kauvery Hospital",
            "Chennai",
            "199, Luz Church Rd, Mylapore, Chennai, 600004",
            "+91 44 4000 6000",
            "https://maps.app.goo.gl/iMU6VCDo7dxFYJtB6",
        ),
        provider(
            "doc-4",
            "Dr. Srinivasan V",
            "Neurologist",
            "MIOT International",
            "Chennai",
            "4/112, Mount Poonamallee Rd, Manapakkam, Chennai, 600089",
            "+91 44 4200 2288",
            "https://maps.app.goo.gl/EiYsFj6g8vCbpvr19",
        ),
        provider(
            "doc-5",
            "Dr. Vijayalakshmi Thanasekaraan",
            "Pulmonologist",
            "Apollo Hospitals",
            "Chennai",
            "21, Greams Lane, Chennai, 600006",
            "+91 44 2829 3333",
            "https://maps.app.goo.gl/5JKcLZX3bZX4LQyZ6",
        ),
        provider(
            "doc-6",
            "Dr. Mohamed Ali",
            "Gastroenterologist",
            "SIMS Hospital",
            "Chennai",
            "1, Jawaharlal Nehru Rd, Vadapalani, Chennai, 600026",
            "+91 44 2476 5500",
            "https://maps.app.goo.gl/fKPpR5pDN7W9JdFH7",
        ),
        provider(
            "doc-7",
            "Dr. Shanti Krishnan",
            "Rheumatologist",
            "Sri Ramachandra Medical Centre",
            "Chennai",
            "No.1, Ramachandra Nagar, Porur, Chennai, 600116",
            "+91 44 2476 8027",
            "https://maps.app.goo.gl/j5CKoZScLSbwfQKM6",
        ),
        provider(
            "doc-8",
            "Dr. Anand Arputharaj",
            "Allergist",
            "Dr. Mehta's Hospitals",
            "Chennai",
            "2, McNichols Rd, Chetpet, Chennai, 600031",
            "+91 44 4227 1500",
            "https://maps.app.goo.gl/KK1XZwpjLRwJ39SL6",
        ),
        provider(
            "doc-9",
            "Dr. Shanmugam P",
            "General Physician",
            "Billroth Hospitals",
            "Chennai",
            "43, Lakshmi Talkies Road, Shenoy Nagar, Chennai, 600030",
            "+91 44 2664 4000",
            "https://maps.app.goo.gl/1UZZFwJVXtVJKMfZ7",
        ),
        provider(
            "doc-10",
            "Dr. Muthukumaran Jayaraman",
            "General Physician",
            "Government General Hospital",
            "Chennai",
            "3, EVR Periyar Salai, Park Town, Chennai, 600003",
            "+91 44 2530 5000",
            "https://maps.app.goo.gl/KqRPBHihCQ4LZr4D9",
        ),
    ]
}
