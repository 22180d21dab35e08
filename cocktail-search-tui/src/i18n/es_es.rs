//! 西班牙语翻译 (es-ES)

use super::keys::{CardTexts, CommonTexts, HintTexts, PanelTexts, SearchTexts, Translations};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "Buscador de Cócteles",
        quit: "Salir",
    },

    hints: HintTexts {
        search: "Buscar",
        switch_focus: "Cambiar foco",
        select: "Seleccionar",
        details: "Ver instrucciones",
        close_panel: "Cerrar",
    },

    search: SearchTexts {
        title: "Buscar cóctel",
        placeholder: "Escribe el nombre de un cóctel...",
        empty_query: "Por favor, ingresa un término de búsqueda",
        load_failed: "Error al cargar los datos. Intenta nuevamente.",
        no_results: "No se encontraron resultados para tu búsqueda",
        loading: "Buscando cócteles...",
        results_title: "Resultados",
        idle_hint: "Escribe un nombre y pulsa Enter para buscar",
    },

    cards: CardTexts {
        alcoholic: " (Alcohólico)",
        non_alcoholic: " (No alcohólico)",
        details_button: "Ver Instrucciones",
        image_label: "Imagen",
        image_unavailable: "Imagen no disponible",
    },

    panel: PanelTexts {
        title_suffix: " - Preparación",
        instructions_suffix: Some("ES"),
        no_instructions: "No hay instrucciones disponibles.",
        ingredients_heading: "Ingredientes:",
        close: "×",
    },
};
