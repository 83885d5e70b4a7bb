use hafa_core::VocabularyEntry;

// (term, translation, pronunciation, usage, example)
type Row = (&'static str, &'static str, &'static str, &'static str, &'static str);

const WORDS: [Row; 12] = [
    (
        "Håfa Adai",
        "Hello",
        "half-a-day",
        "Traditional Chamorro greeting used throughout the day",
        "Håfa Adai! Welcome to Guam!",
    ),
    (
        "Si Yu'os Ma'åse'",
        "Thank you",
        "see-you-os-ma-ah-see",
        "Expression of gratitude and appreciation",
        "Si Yu'os Ma'åse' for helping me today.",
    ),
    (
        "Inafa'maolek",
        "To make good / Harmony",
        "in-a-fa-mow-lek",
        "Core Chamorro value of cooperation and harmony",
        "We practice Inafa'maolek in our community.",
    ),
    (
        "Biba",
        "Long live / Hurray",
        "bee-bah",
        "Celebration or showing pride",
        "Biba Guåhan! (Long live Guam!)",
    ),
    (
        "Hågat",
        "Hello (casual)",
        "haw-got",
        "Informal greeting among friends",
        "Hågat! How are you doing?",
    ),
    (
        "Adios",
        "Goodbye",
        "ah-dee-os",
        "Farewell greeting",
        "Adios, see you tomorrow!",
    ),
    (
        "Pågo",
        "Now",
        "paw-go",
        "Refers to the present moment",
        "We need to leave pågo.",
    ),
    (
        "Guåhan",
        "Guam",
        "gwa-han",
        "The Chamorro name for the island of Guam",
        "I'm from Guåhan, born and raised!",
    ),
    (
        "I Manåmko'",
        "The elders",
        "ee man-am-ko",
        "Respected elders in the community",
        "We learn from I Manåmko' and honor their wisdom.",
    ),
    (
        "Nåna",
        "Mother / Mom",
        "nah-nah",
        "Respectful term for mother",
        "My nåna makes the best kelaguen.",
    ),
    (
        "Tåta",
        "Father / Dad",
        "tah-tah",
        "Respectful term for father",
        "Tåta taught me how to fish.",
    ),
    (
        "Hafa tatatmanu hao?",
        "How are you?",
        "hah-fa ta-tot-ma-nu how",
        "Common greeting to ask about someone's wellbeing",
        "Håfa Adai! Hafa tatatmanu hao?",
    ),
];

/// The built-in Chamorro word list, in teaching order
pub fn reference_entries() -> Vec<VocabularyEntry> {
    WORDS
        .iter()
        .map(|&(term, translation, pronunciation, usage, example)| {
            VocabularyEntry::new(term, translation, pronunciation, usage, example)
        })
        .collect()
}
