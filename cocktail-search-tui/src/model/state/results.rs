//! 结果区状态
//!
//! 结果集与卡片一一对应，且总是一起被整体替换。

use cocktail_lookup::Drink;

use crate::i18n::CardTexts;
use crate::model::domain::{build_card, CardView};

/// 结果区中按顺序排列的节点
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultNode {
    /// 第 i 张卡片
    Card(usize),
    /// 详情面板（紧跟在其所属卡片之后）
    Panel,
}

/// 结果区状态
#[derive(Debug, Default)]
pub struct ResultsState {
    drinks: Vec<Drink>,
    cards: Vec<CardView>,
    /// 当前选中的卡片索引
    pub selected: usize,
}

impl ResultsState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 用新的结果集替换，并重建全部卡片
    pub fn replace(&mut self, drinks: Vec<Drink>, texts: &CardTexts) {
        self.cards = drinks.iter().map(|d| build_card(d, texts)).collect();
        self.drinks = drinks;
        self.selected = 0;
    }

    /// 清空结果集与卡片
    pub fn clear(&mut self) {
        self.drinks.clear();
        self.cards.clear();
        self.selected = 0;
    }

    pub fn cards(&self) -> &[CardView] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.drinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drinks.is_empty()
    }

    /// 第 i 张卡片对应的记录
    pub fn drink_at(&self, index: usize) -> Option<&Drink> {
        self.drinks.get(index)
    }

    /// 按 ID 查找卡片位置（ID 重复时取第一张）
    pub fn position_of(&self, drink_id: &str) -> Option<usize> {
        self.cards.iter().position(|c| c.drink_id() == drink_id)
    }

    /// 当前选中的卡片
    pub fn selected_card(&self) -> Option<&CardView> {
        self.cards.get(self.selected)
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// 选择下一项
    pub fn select_next(&mut self) {
        if self.selected + 1 < self.cards.len() {
            self.selected += 1;
        }
    }

    /// 选择第一项
    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    /// 选择最后一项
    pub fn select_last(&mut self) {
        self.selected = self.cards.len().saturating_sub(1);
    }

    /// 选中指定卡片（越界忽略）
    pub fn select(&mut self, index: usize) {
        if index < self.cards.len() {
            self.selected = index;
        }
    }

    /// 结果区的节点序列；面板挂在第 `panel_anchor` 张卡片之后
    pub fn nodes(&self, panel_anchor: Option<usize>) -> Vec<ResultNode> {
        let mut nodes = Vec::with_capacity(self.cards.len() + 1);
        for i in 0..self.cards.len() {
            nodes.push(ResultNode::Card(i));
            if panel_anchor == Some(i) {
                nodes.push(ResultNode::Panel);
            }
        }
        nodes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{translations, Language};

    fn drinks(ids: &[&str]) -> Vec<Drink> {
        ids.iter()
            .map(|id| Drink::from_fields([("idDrink", *id), ("strDrink", *id)]))
            .collect()
    }

    fn texts() -> &'static CardTexts {
        &translations(Language::EsEs).cards
    }

    #[test]
    fn replace_keeps_cards_in_step_with_drinks() {
        let mut state = ResultsState::new();
        state.replace(drinks(&["1", "2", "3"]), texts());
        assert_eq!(state.len(), 3);
        assert_eq!(state.cards().len(), 3);

        state.replace(drinks(&["9"]), texts());
        assert_eq!(state.cards().len(), 1);
        assert_eq!(state.cards()[0].drink_id(), "9");
        assert!(state.position_of("1").is_none());
        assert!(state.drink_at(1).is_none());
    }

    #[test]
    fn selection_is_clamped() {
        let mut state = ResultsState::new();
        state.replace(drinks(&["1", "2"]), texts());
        state.select_next();
        state.select_next();
        assert_eq!(state.selected, 1);
        state.select_previous();
        state.select_previous();
        assert_eq!(state.selected, 0);
        state.select(5);
        assert_eq!(state.selected, 0);
        state.select_last();
        assert_eq!(state.selected_card().map(CardView::drink_id), Some("2"));
    }

    #[test]
    fn panel_node_follows_its_card() {
        let mut state = ResultsState::new();
        state.replace(drinks(&["1", "2", "3"]), texts());
        assert_eq!(
            state.nodes(Some(1)),
            vec![
                ResultNode::Card(0),
                ResultNode::Card(1),
                ResultNode::Panel,
                ResultNode::Card(2),
            ]
        );
        assert_eq!(state.nodes(Some(7)).len(), 3);
        assert_eq!(state.nodes(None).len(), 3);
    }

    #[test]
    fn duplicate_ids_get_a_single_panel_node() {
        let mut state = ResultsState::new();
        state.replace(drinks(&["7", "7"]), texts());
        assert_eq!(state.position_of("7"), Some(0));

        let nodes = state.nodes(Some(1));
        assert_eq!(
            nodes,
            vec![ResultNode::Card(0), ResultNode::Card(1), ResultNode::Panel]
        );
        assert_eq!(nodes.iter().filter(|n| **n == ResultNode::Panel).count(), 1);
    }
}
