//! 英文翻译 (en-US)

use super::keys::{CardTexts, CommonTexts, HintTexts, PanelTexts, SearchTexts, Translations};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "Cocktail Search",
        quit: "Quit",
    },

    hints: HintTexts {
        search: "Search",
        switch_focus: "Switch focus",
        select: "Select",
        details: "Instructions",
        close_panel: "Close",
    },

    search: SearchTexts {
        title: "Search cocktails",
        placeholder: "Type a cocktail name...",
        empty_query: "Please enter a search term",
        load_failed: "Failed to load data. Please try again.",
        no_results: "No results found for your search",
        loading: "Searching cocktails...",
        results_title: "Results",
        idle_hint: "Type a name and press Enter to search",
    },

    cards: CardTexts {
        alcoholic: " (Alcoholic)",
        non_alcoholic: " (Non-alcoholic)",
        details_button: "View Instructions",
        image_label: "Image",
        image_unavailable: "Image not available",
    },

    // strInstructions is the English text already
    panel: PanelTexts {
        title_suffix: " - Preparation",
        instructions_suffix: None,
        no_instructions: "No instructions available.",
        ingredients_heading: "Ingredients:",
        close: "×",
    },
};
