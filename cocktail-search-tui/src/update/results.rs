//! 结果区的状态更新

use crate::message::ResultsMessage;
use crate::model::App;

use super::panel;

pub fn update(app: &mut App, msg: ResultsMessage) {
    match msg {
        ResultsMessage::SelectPrevious => app.results.select_previous(),
        ResultsMessage::SelectNext => app.results.select_next(),
        ResultsMessage::SelectFirst => app.results.select_first(),
        ResultsMessage::SelectLast => app.results.select_last(),
        ResultsMessage::OpenSelected => {
            let index = app.results.selected;
            if app.results.selected_card().is_some() {
                panel::open_details(app, index);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::t;
    use cocktail_lookup::Drink;

    #[test]
    fn enter_on_selected_card_opens_its_panel() {
        let mut app = App::default();
        let drinks = ["11007", "11000"]
            .into_iter()
            .map(|id| Drink::from_fields([("idDrink", id), ("strDrink", id)]))
            .collect();
        app.results.replace(drinks, &t().cards);

        update(&mut app, ResultsMessage::SelectNext);
        update(&mut app, ResultsMessage::OpenSelected);

        assert!(app.panel.is_open_for("11000"));
    }

    #[test]
    fn open_selected_without_results_is_noop() {
        let mut app = App::default();
        update(&mut app, ResultsMessage::OpenSelected);
        assert!(app.panel.active.is_none());
    }
}
