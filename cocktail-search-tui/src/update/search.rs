//! 搜索相关的状态更新

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::i18n::t;
use crate::message::SearchMessage;
use crate::model::{App, LookupCompletion, LookupOrigin};

use super::Command;

pub fn update(app: &mut App, msg: SearchMessage) -> Command {
    match msg {
        SearchMessage::Input(c) => app.search.insert_char(c),
        SearchMessage::Backspace => app.search.backspace(),
        SearchMessage::Clear => app.search.clear_input(),
        SearchMessage::Submit => return submit(app),
    }
    Command::None
}

/// 校验输入并开始一次用户搜索
fn submit(app: &mut App) -> Command {
    let Some(term) = app.search.query().map(str::to_owned) else {
        app.search.show_error(t().search.empty_query);
        return Command::None;
    };

    // 搜索开始：清空旧结果与错误，立即移除面板，显示加载
    app.panel.remove_now();
    app.results.clear();
    app.search.clear_error();
    app.search.no_results = false;
    app.search.loading = true;

    let request = app.search.next_request(term, LookupOrigin::User);
    log::info!("search #{} started for {:?}", request.seq, request.term);
    Command::Lookup(request)
}

/// 启动时随机挑选一个热门词加载默认内容
pub fn load_default<R: Rng + ?Sized>(app: &mut App, rng: &mut R) -> Command {
    let Some(term) = app.popular.choose(rng).cloned() else {
        log::debug!("no popular terms configured, skipping default content");
        return Command::None;
    };

    let request = app.search.next_request(term, LookupOrigin::Startup);
    log::info!("loading default content #{} for {:?}", request.seq, request.term);
    Command::Lookup(request)
}

/// 应用后台回传的查询结果
pub fn apply_completion(app: &mut App, completion: LookupCompletion) {
    let LookupCompletion { request, result } = completion;

    if !app.search.accepts(request.seq) {
        log::debug!(
            "discarding stale response #{} for {:?} (latest is #{})",
            request.seq,
            request.term,
            app.search.latest_seq()
        );
        return;
    }

    match request.origin {
        LookupOrigin::User => {
            app.search.loading = false;
            match result {
                Ok(drinks) if drinks.is_empty() => {
                    log::info!("search #{} returned no results", request.seq);
                    app.panel.remove_now();
                    app.results.clear();
                    app.search.no_results = true;
                }
                Ok(drinks) => {
                    log::info!("search #{} returned {} drinks", request.seq, drinks.len());
                    app.panel.remove_now();
                    app.results.replace(drinks, &t().cards);
                    app.search.no_results = false;
                }
                Err(e) => {
                    if e.is_expected() {
                        log::warn!("search #{} failed: {e}", request.seq);
                    } else {
                        log::error!("search #{} failed: {e}", request.seq);
                    }
                    app.panel.remove_now();
                    app.results.clear();
                    app.search.no_results = false;
                    app.search.show_error(t().search.load_failed);
                }
            }
        }

        LookupOrigin::Startup => match result {
            Ok(drinks) if drinks.is_empty() => {
                log::info!("default content for {:?} is empty", request.term);
            }
            Ok(drinks) => {
                log::info!("default content loaded: {} drinks", drinks.len());
                app.panel.remove_now();
                app.results.replace(drinks, &t().cards);
                app.search.no_results = false;
                app.search.input = request.term;
            }
            Err(e) => {
                log::warn!("default content for {:?} failed: {e}", request.term);
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LookupRequest, StaleResponsePolicy};
    use crate::update::update as dispatch;
    use crate::message::AppMessage;
    use cocktail_lookup::{Drink, LookupError};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn drink(id: &str, name: &str) -> Drink {
        Drink::from_fields([
            ("idDrink", id),
            ("strDrink", name),
            ("strCategory", "Cocktail"),
            ("strAlcoholic", "Alcoholic"),
        ])
    }

    fn app_with(policy: StaleResponsePolicy) -> App {
        let mut app = App::default();
        app.search.policy = policy;
        app
    }

    fn type_and_submit(app: &mut App, text: &str) -> Command {
        app.search.input = text.to_string();
        dispatch(app, AppMessage::Search(SearchMessage::Submit))
    }

    fn lookup(cmd: Command) -> LookupRequest {
        match cmd {
            Command::Lookup(request) => request,
            Command::None => panic!("expected a lookup command"),
        }
    }

    fn network_error() -> LookupError {
        LookupError::NetworkError {
            source: "thecocktaildb".to_string(),
            detail: "connection refused".to_string(),
        }
    }

    #[test]
    fn valid_query_issues_exactly_one_trimmed_lookup() {
        let mut app = App::default();
        let request = lookup(type_and_submit(&mut app, "  margarita  "));

        assert_eq!(request.term, "margarita");
        assert_eq!(request.origin, LookupOrigin::User);
        assert!(app.search.loading);
        assert!(app.search.error.is_none());
    }

    #[test]
    fn blank_query_is_rejected_without_lookup() {
        let mut app = App::default();
        for input in ["", "   ", "\t\n"] {
            assert_eq!(type_and_submit(&mut app, input), Command::None);
            assert_eq!(
                app.search.error.as_deref(),
                Some("Por favor, ingresa un término de búsqueda")
            );
            assert!(!app.search.loading);
        }
        assert_eq!(app.search.latest_seq(), 0);
    }

    #[test]
    fn search_start_clears_previous_state() {
        let mut app = App::default();
        app.results.replace(vec![drink("1", "A")], &t().cards);
        app.search.show_error("old");
        app.search.no_results = true;
        dispatch(&mut app, AppMessage::Panel(crate::message::PanelMessage::Open("1".into())));
        assert!(app.panel.attached_to().is_some());

        type_and_submit(&mut app, "gin");

        assert!(app.results.is_empty());
        assert!(app.search.error.is_none());
        assert!(!app.search.no_results);
        assert!(app.panel.attached_to().is_none());
        assert!(app.panel.listeners.is_empty());
    }

    #[test]
    fn zero_matches_shows_no_results_state() {
        let mut app = App::default();
        let request = lookup(type_and_submit(&mut app, "xyzzy"));

        apply_completion(&mut app, LookupCompletion { request, result: Ok(Vec::new()) });

        assert!(app.search.no_results);
        assert!(app.results.is_empty());
        assert!(app.search.error.is_none());
        assert!(!app.search.loading);
    }

    #[test]
    fn matches_become_cards() {
        let mut app = App::default();
        let request = lookup(type_and_submit(&mut app, "ma"));
        let drinks = vec![drink("1", "Margarita"), drink("2", "Mai Tai"), drink("3", "Manhattan")];

        apply_completion(&mut app, LookupCompletion { request, result: Ok(drinks) });

        assert_eq!(app.results.len(), 3);
        let titles: Vec<_> = app.results.cards().iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, ["Margarita", "Mai Tai", "Manhattan"]);
        assert_eq!(app.results.cards()[1].category_line, "Cocktail (Alcohólico)");
        assert_eq!(app.results.cards()[2].drink_id(), "3");
        assert!(!app.search.no_results);
    }

    #[test]
    fn failure_shows_single_error_and_clears_loading() {
        let mut app = App::default();
        let request = lookup(type_and_submit(&mut app, "mojito"));

        apply_completion(&mut app, LookupCompletion { request, result: Err(network_error()) });

        assert!(!app.search.loading);
        assert!(app.results.is_empty());
        assert!(!app.search.no_results);
        assert_eq!(
            app.search.error.as_deref(),
            Some("Error al cargar los datos. Intenta nuevamente.")
        );
    }

    #[test]
    fn latest_only_discards_stale_response() {
        let mut app = app_with(StaleResponsePolicy::LatestOnly);
        let first = lookup(type_and_submit(&mut app, "margarita"));
        let second = lookup(type_and_submit(&mut app, "mojito"));

        apply_completion(
            &mut app,
            LookupCompletion { request: second, result: Ok(vec![drink("2", "Mojito")]) },
        );
        apply_completion(
            &mut app,
            LookupCompletion { request: first, result: Ok(vec![drink("1", "Margarita")]) },
        );

        assert_eq!(app.results.len(), 1);
        assert_eq!(app.results.cards()[0].title, "Mojito");
    }

    #[test]
    fn latest_only_keeps_loading_until_latest_arrives() {
        let mut app = app_with(StaleResponsePolicy::LatestOnly);
        let first = lookup(type_and_submit(&mut app, "margarita"));
        let _second = lookup(type_and_submit(&mut app, "mojito"));

        apply_completion(&mut app, LookupCompletion { request: first, result: Err(network_error()) });

        assert!(app.search.loading);
        assert!(app.search.error.is_none());
    }

    #[test]
    fn legacy_applies_late_stale_response() {
        let mut app = app_with(StaleResponsePolicy::Legacy);
        let first = lookup(type_and_submit(&mut app, "margarita"));
        let second = lookup(type_and_submit(&mut app, "mojito"));

        apply_completion(
            &mut app,
            LookupCompletion { request: second, result: Ok(vec![drink("2", "Mojito")]) },
        );
        apply_completion(
            &mut app,
            LookupCompletion { request: first, result: Ok(vec![drink("1", "Margarita")]) },
        );

        assert_eq!(app.results.cards()[0].title, "Margarita");
    }

    #[test]
    fn startup_success_fills_results_and_input() {
        let mut app = App::default();
        let mut rng = StdRng::seed_from_u64(7);
        let request = lookup(load_default(&mut app, &mut rng));
        let term = request.term.clone();

        apply_completion(
            &mut app,
            LookupCompletion { request, result: Ok(vec![drink("11007", "Margarita")]) },
        );

        assert_eq!(app.results.len(), 1);
        assert_eq!(app.search.input, term);
        assert!(!app.search.loading);
    }

    #[test]
    fn startup_empty_result_changes_nothing() {
        let mut app = App::default();
        app.results.replace(vec![drink("11000", "Mojito")], &t().cards);
        let mut rng = StdRng::seed_from_u64(3);
        let request = lookup(load_default(&mut app, &mut rng));

        apply_completion(&mut app, LookupCompletion { request, result: Ok(Vec::new()) });

        assert_eq!(app.results.len(), 1);
        assert_eq!(app.results.cards()[0].drink_id(), "11000");
        assert!(!app.search.no_results);
        assert!(app.search.input.is_empty());
        assert!(app.search.error.is_none());
    }

    #[test]
    fn startup_failure_is_silent() {
        let mut app = App::default();
        let mut rng = StdRng::seed_from_u64(1);
        let request = lookup(load_default(&mut app, &mut rng));

        apply_completion(&mut app, LookupCompletion { request, result: Err(network_error()) });

        assert!(app.search.error.is_none());
        assert!(app.results.is_empty());
        assert!(app.search.input.is_empty());
    }

    #[test]
    fn user_search_beats_slow_startup_lookup() {
        let mut app = App::default();
        let mut rng = StdRng::seed_from_u64(3);
        let startup = lookup(load_default(&mut app, &mut rng));
        let user = lookup(type_and_submit(&mut app, "gin"));

        apply_completion(&mut app, LookupCompletion { request: user, result: Ok(vec![drink("5", "Gin Fizz")]) });
        apply_completion(&mut app, LookupCompletion { request: startup, result: Ok(vec![drink("1", "Margarita")]) });

        assert_eq!(app.results.cards()[0].title, "Gin Fizz");
        assert_eq!(app.search.input, "gin");
    }

    #[test]
    fn no_popular_terms_means_no_startup_lookup() {
        let mut app = App::default();
        app.popular.clear();
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(load_default(&mut app, &mut rng), Command::None);
    }
}
