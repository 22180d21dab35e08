//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::time::Duration;

use cocktail_lookup::{CocktailLookup, LookupConfig, TheCocktailDbLookup};
use serde_json::{Value, json};
use wiremock::MockServer;

/// 跳过测试的宏（当未显式开启在线测试时）
#[macro_export]
macro_rules! skip_unless_enabled {
    ($var:expr) => {
        if std::env::var($var).is_err() {
            eprintln!("跳过测试: 未设置环境变量 {}", $var);
            return;
        }
    };
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// 指向 mock server 的查询客户端
pub fn lookup_for(server: &MockServer) -> Option<Box<dyn CocktailLookup>> {
    let config = LookupConfig {
        base_url: server.uri(),
        connect_timeout: Duration::from_secs(2),
        request_timeout: Duration::from_millis(500),
    };
    TheCocktailDbLookup::new(&config)
        .ok()
        .map(|lookup| Box::new(lookup) as Box<dyn CocktailLookup>)
}

/// 最小化的饮品记录
pub fn drink_json(id: &str, name: &str) -> Value {
    json!({
        "idDrink": id,
        "strDrink": name,
        "strCategory": "Ordinary Drink",
        "strAlcoholic": "Alcoholic",
        "strDrinkThumb": format!("https://www.thecocktaildb.com/images/media/drink/{id}.jpg"),
        "strInstructions": "Shake and strain.",
        "strInstructionsES": null,
        "strIngredient1": "Tequila",
        "strMeasure1": "1 1/2 oz ",
        "strIngredient2": null,
        "strMeasure2": null,
    })
}
