//! Precaution and diet recommendation tables.
//!
//! Static, non-personalized guidance attached to analysis results. Entries
//! are keyed by condition id; anything the table does not know falls back to
//! the general lists.

use serde::{Deserialize, Serialize};

use crate::models::Prediction;

/// Advice assembled for one analysis result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdviceSheet {
    pub precautions: Vec<String>,
    pub diet: Vec<String>,
}

const GENERAL_PRECAUTIONS: &[&str] = &[
    "Get plenty of rest",
    "Stay hydrated",
    "Take over-the-counter pain relievers if needed",
    "Use a humidifier to add moisture to the air",
];

const GENERAL_DIET: &[&str] = &[
    "Chicken soup",
    "Herbal tea with honey",
    "Citrus fruits",
    "Leafy green vegetables",
    "Foods rich in zinc",
];

/// Per-condition tables, keyed by catalog condition id.
fn condition_advice(condition_ref: &str) -> Option<(&'static [&'static str], &'static [&'static str])> {
    match condition_ref {
        "common-cold" => Some((
            &[
                "Get plenty of rest",
                "Stay hydrated",
                "Gargle with warm salt water for a sore throat",
            ],
            &["Chicken soup", "Herbal tea with honey", "Citrus fruits"],
        )),
        "flu" => Some((
            &[
                "Stay home and rest until the fever passes",
                "Stay hydrated",
                "Monitor your temperature",
            ],
            &["Clear broths", "Herbal tea with honey", "Foods rich in zinc"],
        )),
        "allergies" => Some((
            &[
                "Keep windows closed during high pollen counts",
                "Shower after spending time outdoors",
                "Consider an air purifier at home",
            ],
            &["Local honey", "Foods rich in vitamin C", "Omega-3 rich fish"],
        )),
        "migraine" => Some((
            &[
                "Rest in a quiet, dark room",
                "Apply a cold compress to your forehead",
                "Keep a headache diary to identify triggers",
            ],
            &["Magnesium-rich foods", "Plenty of water", "Ginger tea"],
        )),
        "gerd" => Some((
            &[
                "Avoid lying down within three hours of eating",
                "Eat smaller, more frequent meals",
                "Elevate the head of your bed",
            ],
            &["Oatmeal", "Non-citrus fruits", "Lean proteins", "Vegetables"],
        )),
        "asthma" => Some((
            &[
                "Avoid known triggers such as smoke and dust",
                "Keep your rescue inhaler accessible",
                "Monitor your breathing during exercise",
            ],
            &["Foods rich in vitamin D", "Leafy green vegetables", "Bananas"],
        )),
        "arthritis" => Some((
            &[
                "Stay active with low-impact exercise",
                "Apply warm compresses to stiff joints",
                "Maintain a healthy weight",
            ],
            &["Fatty fish", "Walnuts", "Berries", "Olive oil"],
        )),
        "hypertension" => Some((
            &[
                "Reduce sodium in your diet",
                "Monitor your blood pressure regularly",
                "Limit alcohol and avoid smoking",
            ],
            &["Leafy green vegetables", "Berries", "Oats", "Low-fat dairy"],
        )),
        _ => None,
    }
}

fn push_unique(list: &mut Vec<String>, items: &[&str]) {
    for item in items {
        if !list.iter().any(|existing| existing == item) {
            list.push(item.to_string());
        }
    }
}

/// Assemble the advice sheet for a prediction list. Condition tables are
/// merged in prediction order with first-seen dedup; predictions the table
/// does not know (or an empty list) produce the general defaults.
pub fn for_predictions(predictions: &[Prediction]) -> AdviceSheet {
    let mut precautions = Vec::new();
    let mut diet = Vec::new();

    for prediction in predictions {
        if let Some((condition_precautions, condition_diet)) =
            condition_advice(&prediction.condition_ref)
        {
            push_unique(&mut precautions, condition_precautions);
            push_unique(&mut diet, condition_diet);
        }
    }

    if precautions.is_empty() {
        push_unique(&mut precautions, GENERAL_PRECAUTIONS);
    }
    if diet.is_empty() {
        push_unique(&mut diet, GENERAL_DIET);
    }

    AdviceSheet { precautions, diet }
}
