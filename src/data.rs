// File: src/data.rs
//! The built-in lexicon, grouped by the region each term belongs to.
use crate::core::types::{Region, SafetyLevel, SlangTerm};

use crate::core::types::Region::{Bardhaman, Kolkata, TarakeswarHooghly};
use crate::core::types::SafetyLevel::{DoNotUse, FriendlyRoast, OffensiveAnnoying, SafeFriendly};

struct Row {
    word: &'static str,
    script: &'static str,
    meaning: &'static str,
    usage: &'static str,
    level: SafetyLevel,
    region: Region,
    context: &'static str,
    examples: &'static [&'static str],
}

impl Row {
    fn to_term(&self) -> SlangTerm {
        SlangTerm {
            word: self.word.to_string(),
            bangla_script: self.script.to_string(),
            meaning: self.meaning.to_string(),
            usage: self.usage.to_string(),
            safety_level: self.level,
            regions: vec![self.region],
            cultural_context: self.context.to_string(),
            examples: self.examples.iter().map(|e| e.to_string()).collect(),
        }
    }
}

const ROWS: &[Row] = &[
    // Kolkata urban hub
    Row {
        word: "Lyadh",
        script: "ল্যাদ",
        meaning: "Proactive Laziness",
        usage: "A lifestyle choice; enjoying doing nothing.",
        level: SafeFriendly,
        region: Kolkata,
        context: "Core concept of Kolkata urban culture, represents the art of productive relaxation",
        examples: &["Aj puro din lyadh korbo", "Lyadh is a way of life in Kolkata"],
    },
    Row {
        word: "Aantel",
        script: "আঁতেল",
        meaning: "Pseudo-intellectual",
        usage: "Someone acting too smart at a tea stall.",
        level: FriendlyRoast,
        region: Kolkata,
        context: "Used to describe someone showing off their knowledge inappropriately",
        examples: &["Oi aantel ta ki bolche", "Aantel hoye kaj nei"],
    },
    Row {
        word: "Chap",
        script: "চাপ",
        meaning: "Stress/Pressure",
        usage: "Used when things are difficult or busy.",
        level: SafeFriendly,
        region: Kolkata,
        context: "Common expression for stress in daily life",
        examples: &["Khub chap ache", "Chap niye kaj korchi"],
    },
    Row {
        word: "Kelane",
        script: "ক্যালানে",
        meaning: "Silly/Grinning",
        usage: "Someone smiling foolishly like a joker.",
        level: DoNotUse,
        region: Kolkata,
        context: "Offensive term that can be hurtful when used to describe someone",
        examples: &[],
    },
    Row {
        word: "Fatafati",
        script: "ফাটাফাটি",
        meaning: "Awesome",
        usage: "The ultimate compliment for anything good.",
        level: SafeFriendly,
        region: Kolkata,
        context: "Popular positive expression used widely in Bengali culture",
        examples: &["Fatafati khawa hoyeche", "Eta fatafati lagche"],
    },
    Row {
        word: "Poka",
        script: "পোকা",
        meaning: "Obsession",
        usage: "A \"buff\" (e.g., Movie-poka, Boi-poka).",
        level: SafeFriendly,
        region: Kolkata,
        context: "Endearing term for someone passionate about something",
        examples: &["Tui to cinema poka", "Boi poka hoye gechi"],
    },
    // Bardhaman belt (Rarh Banga)
    Row {
        word: "Situa",
        script: "সিতুয়া",
        meaning: "Damp/Chilly",
        usage: "Unique to this region. Used for weather or damp clothes.",
        level: SafeFriendly,
        region: Bardhaman,
        context: "Regional weather term specific to Bardhaman area",
        examples: &["Aj situa lagche", "Kapor gulo situa hoye geche"],
    },
    Row {
        word: "Bari-ghora",
        script: "বাড়ি-ঘোড়া",
        meaning: "Showing off",
        usage: "Acting like a rich landlord (Zamindar style).",
        level: FriendlyRoast,
        region: Bardhaman,
        context: "References the historical zamindar culture of rural Bengal",
        examples: &["Bari-ghora korche keno", "Zamindar er moto bari-ghora"],
    },
    Row {
        word: "Pod paka",
        script: "পোদ পাকা",
        meaning: "Precocious/Spoiled",
        usage: "Someone acting too mature/wicked for their age.",
        level: SafeFriendly,
        region: Bardhaman,
        context: "Used to describe children who act beyond their years",
        examples: &["Chele ta pod paka", "Pod paka hoye geche"],
    },
    Row {
        word: "Mayya",
        script: "মাইয়া",
        meaning: "Girl",
        usage: "Regional dialect for \"Meye.\"",
        level: FriendlyRoast,
        region: Bardhaman,
        context: "Rural dialect variation of the standard Bengali word for girl",
        examples: &["Oi mayya ta ke", "Mayya gulo elo"],
    },
    Row {
        word: "Pet hoyeche",
        script: "পেট হয়েছে",
        meaning: "Pregnant",
        usage: "A very blunt, non-medical way to say someone is pregnant.",
        level: OffensiveAnnoying,
        region: Bardhaman,
        context: "Crude way to refer to pregnancy, can be offensive",
        examples: &[],
    },
    Row {
        word: "Poati",
        script: "পোয়াতি",
        meaning: "Pregnant woman",
        usage: "Traditional/Rural term for a pregnant lady.",
        level: DoNotUse,
        region: Bardhaman,
        context: "Outdated and potentially offensive term for pregnant women",
        examples: &[],
    },
    Row {
        word: "Mag-Bhatar",
        script: "মাগ-ভাতার",
        meaning: "Wife & Husband",
        usage: "Very crude/low-class way to refer to a married couple.",
        level: DoNotUse,
        region: Bardhaman,
        context: "Highly disrespectful way to refer to married couples",
        examples: &[],
    },
    Row {
        word: "Maagi",
        script: "মাগি",
        meaning: "Girl/Woman",
        usage: "Historically meant woman, now a heavy sexual slur.",
        level: DoNotUse,
        region: Bardhaman,
        context: "Extremely offensive sexual slur, never appropriate to use",
        examples: &[],
    },
    Row {
        word: "Maagibaji",
        script: "মাগিবাড়ি",
        meaning: "Womanizing",
        usage: "Running around chasing women for sex.",
        level: DoNotUse,
        region: Bardhaman,
        context: "Vulgar term for inappropriate sexual behavior",
        examples: &[],
    },
    Row {
        word: "Nang korta jawa",
        script: "নাঙ করতে যাওয়া",
        meaning: "Infidelity",
        usage: "Going to bed with someone other than a spouse.",
        level: DoNotUse,
        region: Bardhaman,
        context: "Crude reference to extramarital affairs",
        examples: &[],
    },
    Row {
        word: "Barobhatari",
        script: "বারোভাতারী",
        meaning: "Slut",
        usage: "Highly offensive term for a woman with many partners.",
        level: DoNotUse,
        region: Bardhaman,
        context: "Extremely derogatory term for women, never acceptable",
        examples: &[],
    },
    // Tarakeswar & Hooghly corridor (temple town)
    Row {
        word: "Toto-giri",
        script: "টোটো-গিরি",
        meaning: "E-Rickshaw roaming",
        usage: "Wasting time traveling aimlessly in a Toto.",
        level: SafeFriendly,
        region: TarakeswarHooghly,
        context: "Modern term referring to the popular e-rickshaw transport",
        examples: &["Toto-giri korchi", "Puro din toto-giri"],
    },
    Row {
        word: "Jatri",
        script: "যাত্রী",
        meaning: "Pilgrim",
        usage: "Refers to the massive Shiva temple crowds.",
        level: SafeFriendly,
        region: TarakeswarHooghly,
        context: "Religious context specific to temple towns like Tarakeswar",
        examples: &["Jatri ra elo", "Tarakeswar e jatri der bhir"],
    },
    Row {
        word: "Naite jabo",
        script: "নাইতে যাব",
        meaning: "Bathing",
        usage: "Local way of saying \"I am going to bathe.\"",
        level: SafeFriendly,
        region: TarakeswarHooghly,
        context: "Regional dialect for bathing, common in rural areas",
        examples: &["Naite jabo ekhon", "Naite gelo"],
    },
    // Kept for academic completeness; every one of these is DoNotUse.
    Row {
        word: "Khankir chala",
        script: "খানকির ছেলে",
        meaning: "Son of a whore",
        usage: "Extremely offensive insult used in heated fights.",
        level: DoNotUse,
        region: TarakeswarHooghly,
        context: "Extremely vulgar insult, causes serious social offense",
        examples: &[],
    },
    Row {
        word: "Sodanir pola",
        script: "সোদানির পোলা",
        meaning: "Son of a fucker",
        usage: "Heavy regional insult, very vulgar.",
        level: DoNotUse,
        region: TarakeswarHooghly,
        context: "Highly offensive regional curse word",
        examples: &[],
    },
    Row {
        word: "Khanki chudi",
        script: "খানকি চুদি",
        meaning: "Sexual Slur",
        usage: "Highly offensive sexual slur toward women.",
        level: DoNotUse,
        region: TarakeswarHooghly,
        context: "Extremely vulgar sexual slur, never appropriate",
        examples: &[],
    },
    Row {
        word: "Chutmarani",
        script: "চুতমারানি",
        meaning: "Pussy-fucker",
        usage: "Highly vulgar term for a man.",
        level: DoNotUse,
        region: TarakeswarHooghly,
        context: "Extremely vulgar sexual insult",
        examples: &[],
    },
    Row {
        word: "Magmarani",
        script: "মাগমারানি",
        meaning: "Adulterer",
        usage: "Man chasing other men's wives.",
        level: DoNotUse,
        region: TarakeswarHooghly,
        context: "Vulgar term for inappropriate sexual behavior",
        examples: &[],
    },
    Row {
        word: "Honder pola",
        script: "হন্ডের পোলা",
        meaning: "Son of a bitch",
        usage: "Crude insult for someone's character.",
        level: DoNotUse,
        region: TarakeswarHooghly,
        context: "Offensive character insult",
        examples: &[],
    },
    Row {
        word: "Bara",
        script: "বাড়",
        meaning: "Penis",
        usage: "Used as an exclamation of extreme frustration.",
        level: DoNotUse,
        region: TarakeswarHooghly,
        context: "Vulgar anatomical reference used as curse word",
        examples: &[],
    },
    Row {
        word: "Chudlingpong",
        script: "চুদলিংপং",
        meaning: "Clusterfuck",
        usage: "Used when something goes very wrong or weirdly.",
        level: DoNotUse,
        region: TarakeswarHooghly,
        context: "Vulgar expression for chaotic situations",
        examples: &[],
    },
    Row {
        word: "Baba choda",
        script: "বাবা চোদা",
        meaning: "Father-fucker",
        usage: "One of the heaviest, most offensive slurs.",
        level: DoNotUse,
        region: TarakeswarHooghly,
        context: "Extremely offensive familial insult, causes severe social consequences",
        examples: &[],
    },
    Row {
        word: "Boka choda",
        script: "বোকা চোদা",
        meaning: "Stupid fucker",
        usage: "Someone who is foolish and useless.",
        level: DoNotUse,
        region: TarakeswarHooghly,
        context: "Vulgar insult combining stupidity with sexual vulgarity",
        examples: &[],
    },
    Row {
        word: "Layaura",
        script: "লাউড়া",
        meaning: "Frustration",
        usage: "Said when a task fails and you are angry.",
        level: DoNotUse,
        region: TarakeswarHooghly,
        context: "Vulgar expression of frustration",
        examples: &[],
    },
    Row {
        word: "Gar",
        script: "গাড়",
        meaning: "Asshole",
        usage: "Referring to the anatomy or an annoying person.",
        level: DoNotUse,
        region: TarakeswarHooghly,
        context: "Vulgar anatomical reference used as insult",
        examples: &[],
    },
];

/// Builds the default lexicon in storage order.
pub fn builtin_lexicon() -> Vec<SlangTerm> {
    ROWS.iter().map(Row::to_term).collect()
}
