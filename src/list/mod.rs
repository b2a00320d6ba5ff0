//! The card-list state manager: owns the canonical ordered collection, the
//! origin snapshot, and the sort mode, and re-renders through its [`ListView`]
//! after every mutation. Unknown ids degrade to no-ops throughout — the
//! manager is a total state machine, callers inspect the collection when they
//! need to know whether a mutation applied.

pub mod view;

use serde::{Deserialize, Serialize};

use crate::model::card::{Card, CardData, CardPatch, VoteDirection, Votes};

pub use view::{ListView, NullView, ViewError};

/// View-only ordering toggle. Never mutates canonical order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    #[default]
    Default,
    Votes,
}

impl SortMode {
    pub fn flipped(self) -> SortMode {
        match self {
            SortMode::Default => SortMode::Votes,
            SortMode::Votes => SortMode::Default,
        }
    }
}

/// Compute the display order for `cards` under `mode`. The votes ordering is
/// a stable descending sort on net score, so tied cards keep their canonical
/// relative order.
pub fn display_order(cards: &[Card], mode: SortMode) -> Vec<&Card> {
    let mut ordered: Vec<&Card> = cards.iter().collect();
    if mode == SortMode::Votes {
        ordered.sort_by_key(|c| std::cmp::Reverse(c.votes.score()));
    }
    ordered
}

/// The list state manager. One instance per board; the collection is mutated
/// only through these operations.
pub struct CardList<V: ListView> {
    cards: Vec<Card>,
    origin: Option<Vec<Card>>,
    sort_mode: SortMode,
    pub view: V,
}

impl<V: ListView> CardList<V> {
    pub fn new(view: V) -> Self {
        CardList {
            cards: Vec::new(),
            origin: None,
            sort_mode: SortMode::Default,
            view,
        }
    }

    // -- Queries ------------------------------------------------------------

    /// Defensive copy of the collection in canonical order, independent of
    /// the active sort mode. Persistence always saves this order.
    pub fn get_all(&self) -> Vec<Card> {
        self.cards.clone()
    }

    pub fn card(&self, id: &str) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn sort_mode(&self) -> SortMode {
        self.sort_mode
    }

    pub fn has_origin(&self) -> bool {
        self.origin.is_some()
    }

    // -- Mutations ----------------------------------------------------------

    /// Replace the collection wholesale with a normalized copy of `records`.
    /// When `mark_as_origin` is set, the normalized result also becomes the
    /// origin snapshot that `reset` restores.
    pub fn load(&mut self, records: Vec<CardData>, mark_as_origin: bool) -> Result<(), ViewError> {
        self.cards = records
            .into_iter()
            .enumerate()
            .map(|(index, raw)| raw.normalize(index))
            .collect();
        if mark_as_origin {
            self.origin = Some(self.cards.clone());
        }
        self.render_full()
    }

    /// Tri-state vote toggle on the matching card. Re-renders only that
    /// card's tally unless the votes ordering is active, in which case the
    /// score change can move the card.
    pub fn vote(&mut self, id: &str, direction: VoteDirection) -> Result<(), ViewError> {
        let Some(index) = self.position(id) else {
            return Ok(());
        };
        self.cards[index].apply_vote(direction);

        if self.sort_mode == SortMode::Votes {
            return self.render_full();
        }
        let card = &self.cards[index];
        let patch = CardPatch {
            votes: Some(card.votes),
            user_vote: Some(card.user_vote),
            ..Default::default()
        };
        self.view.patch_card(card, &patch)
    }

    /// Shallow-merge `patch` into the matching card. Incremental re-render
    /// of that card only, unless the merge touched votes while sorted by
    /// votes.
    pub fn update(&mut self, id: &str, patch: CardPatch) -> Result<(), ViewError> {
        let Some(index) = self.position(id) else {
            return Ok(());
        };
        let votes_touched = patch.votes.is_some();
        self.cards[index].apply_patch(&patch);

        if votes_touched && self.sort_mode == SortMode::Votes {
            return self.render_full();
        }
        self.view.patch_card(&self.cards[index], &patch)
    }

    /// Append a new card in canonical order. A fresh id is assigned when the
    /// payload carries none; vote state is always reset — new cards never
    /// inherit votes. Returns the card's id.
    pub fn add(&mut self, mut data: CardData) -> Result<String, ViewError> {
        data.votes = Some(Votes::default());
        data.user_vote = None;
        if data.id.is_none() {
            data.id = Some(self.fresh_id());
        }
        let card = data.normalize(self.cards.len());
        let id = card.id.clone();
        self.cards.push(card);
        self.render_full()?;
        Ok(id)
    }

    /// Remove the matching card. No-op when `id` is unknown.
    pub fn remove(&mut self, id: &str) -> Result<(), ViewError> {
        let Some(index) = self.position(id) else {
            return Ok(());
        };
        self.cards.remove(index);
        self.render_full()
    }

    /// Move the dragged card to the position held by the target: both indices
    /// are taken before removal, then the dragged card is reinserted at the
    /// pre-removal target index. Forces the sort mode back to default — a
    /// manual reorder adopts the resulting order. Atomic: if the re-render
    /// fails the collection is rolled back and re-rendered as it was.
    pub fn reorder(&mut self, dragged_id: &str, target_id: &str) -> Result<(), ViewError> {
        if dragged_id == target_id {
            return Ok(());
        }
        let Some(from) = self.position(dragged_id) else {
            return Ok(());
        };
        let Some(to) = self.position(target_id) else {
            return Ok(());
        };

        self.sort_mode = SortMode::Default;
        let before = self.cards.clone();

        let dragged = self.cards.remove(from);
        let insert_at = to.min(self.cards.len());
        self.cards.insert(insert_at, dragged);

        if let Err(err) = self.render_full() {
            log::warn!("reorder re-render failed, rolling back: {err}");
            self.cards = before;
            let _ = self.render_full();
            return Err(err);
        }
        Ok(())
    }

    /// Flip between canonical and votes ordering and re-render the derived
    /// view. Returns the new mode so callers can reflect it.
    pub fn toggle_sort(&mut self) -> Result<SortMode, ViewError> {
        self.sort_mode = self.sort_mode.flipped();
        self.render_full()?;
        Ok(self.sort_mode)
    }

    /// Restore the origin snapshot (or empty the collection when none was
    /// captured) and force the sort mode back to default.
    pub fn reset(&mut self) -> Result<(), ViewError> {
        self.cards = self.origin.clone().unwrap_or_default();
        self.sort_mode = SortMode::Default;
        self.render_full()
    }

    // -- Internals ----------------------------------------------------------

    fn position(&self, id: &str) -> Option<usize> {
        self.cards.iter().position(|c| c.id == id)
    }

    fn render_full(&mut self) -> Result<(), ViewError> {
        let ordered = display_order(&self.cards, self.sort_mode);
        self.view.render_all(&ordered)
    }

    /// Time-based token for user-added cards, bumped until unique.
    fn fresh_id(&self) -> String {
        let stamp = chrono::Utc::now().timestamp_millis();
        let mut candidate = format!("card_{stamp}");
        let mut bump = 0u32;
        while self.position(&candidate).is_some() {
            bump += 1;
            candidate = format!("card_{stamp}_{bump}");
        }
        candidate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Records every refresh so tests can assert on rendered order and on
    /// full-vs-incremental refresh decisions.
    #[derive(Debug, Default)]
    struct RecordingView {
        events: Vec<Event>,
    }

    #[derive(Debug, PartialEq)]
    enum Event {
        Full(Vec<String>),
        Patch(String),
    }

    impl ListView for RecordingView {
        fn render_all(&mut self, cards: &[&Card]) -> Result<(), ViewError> {
            self.events
                .push(Event::Full(cards.iter().map(|c| c.id.clone()).collect()));
            Ok(())
        }

        fn patch_card(&mut self, card: &Card, _patch: &CardPatch) -> Result<(), ViewError> {
            self.events.push(Event::Patch(card.id.clone()));
            Ok(())
        }
    }

    /// Fails every full refresh while `fail` is set.
    #[derive(Debug, Default)]
    struct FlakyView {
        fail: bool,
        last_order: Vec<String>,
    }

    impl ListView for FlakyView {
        fn render_all(&mut self, cards: &[&Card]) -> Result<(), ViewError> {
            if self.fail {
                return Err(ViewError::Refresh("injected".into()));
            }
            self.last_order = cards.iter().map(|c| c.id.clone()).collect();
            Ok(())
        }

        fn patch_card(&mut self, _card: &Card, _patch: &CardPatch) -> Result<(), ViewError> {
            Ok(())
        }
    }

    fn raw(id: &str, up: u32, down: u32) -> CardData {
        CardData {
            id: Some(id.into()),
            title: id.to_uppercase(),
            votes: Some(Votes { up, down }),
            ..Default::default()
        }
    }

    fn ids<V: ListView>(list: &CardList<V>) -> Vec<String> {
        list.get_all().into_iter().map(|c| c.id).collect()
    }

    fn loaded(records: Vec<CardData>) -> CardList<RecordingView> {
        let mut list = CardList::new(RecordingView::default());
        list.load(records, true).unwrap();
        list
    }

    #[test]
    fn load_assigns_positional_ids_and_renders() {
        let mut list = CardList::new(RecordingView::default());
        list.load(
            vec![
                CardData {
                    title: "first".into(),
                    ..Default::default()
                },
                raw("keep", 0, 0),
                CardData {
                    title: "third".into(),
                    ..Default::default()
                },
            ],
            true,
        )
        .unwrap();
        assert_eq!(ids(&list), vec!["card_0", "keep", "card_2"]);
        assert_eq!(
            list.view.events,
            vec![Event::Full(vec![
                "card_0".into(),
                "keep".into(),
                "card_2".into()
            ])]
        );
    }

    #[test]
    fn vote_cycle_restores_tally_after_two_calls() {
        let mut list = loaded(vec![raw("a", 3, 1)]);
        list.vote("a", VoteDirection::Up).unwrap();
        list.vote("a", VoteDirection::Up).unwrap();
        let card = list.card("a").unwrap();
        assert_eq!(card.votes, Votes { up: 3, down: 1 });
        assert_eq!(card.user_vote, None);
        list.vote("a", VoteDirection::Up).unwrap();
        assert_eq!(list.card("a").unwrap().votes, Votes { up: 4, down: 1 });
    }

    #[test]
    fn vote_up_then_down_switches() {
        let mut list = loaded(vec![raw("a", 0, 0)]);
        list.vote("a", VoteDirection::Up).unwrap();
        list.vote("a", VoteDirection::Down).unwrap();
        let card = list.card("a").unwrap();
        assert_eq!(card.votes, Votes { up: 0, down: 1 });
        assert_eq!(card.user_vote, Some(VoteDirection::Down));
    }

    #[test]
    fn vote_patches_one_card_in_default_mode() {
        let mut list = loaded(vec![raw("a", 0, 0), raw("b", 0, 0)]);
        list.vote("a", VoteDirection::Up).unwrap();
        assert_eq!(list.view.events.last(), Some(&Event::Patch("a".into())));
    }

    #[test]
    fn vote_rerenders_fully_in_votes_mode() {
        let mut list = loaded(vec![raw("a", 0, 0), raw("b", 5, 0)]);
        list.toggle_sort().unwrap();
        list.vote("a", VoteDirection::Up).unwrap();
        assert!(matches!(list.view.events.last(), Some(Event::Full(_))));
    }

    #[test]
    fn vote_on_unknown_id_is_a_noop() {
        let mut list = loaded(vec![raw("a", 2, 0)]);
        let before = list.get_all();
        let events = list.view.events.len();
        list.vote("ghost", VoteDirection::Up).unwrap();
        assert_eq!(list.get_all(), before);
        assert_eq!(list.view.events.len(), events);
    }

    #[test]
    fn toggle_sort_changes_rendered_order_not_canonical() {
        let mut list = loaded(vec![raw("low", 0, 0), raw("high", 9, 0)]);
        let mode = list.toggle_sort().unwrap();
        assert_eq!(mode, SortMode::Votes);
        assert_eq!(ids(&list), vec!["low", "high"]);
        assert_eq!(
            list.view.events.last(),
            Some(&Event::Full(vec!["high".into(), "low".into()]))
        );
        let mode = list.toggle_sort().unwrap();
        assert_eq!(mode, SortMode::Default);
        assert_eq!(
            list.view.events.last(),
            Some(&Event::Full(vec!["low".into(), "high".into()]))
        );
    }

    #[test]
    fn votes_sort_is_stable_on_ties() {
        let cards: Vec<Card> = vec![raw("a", 2, 1), raw("b", 1, 0), raw("c", 3, 0)]
            .into_iter()
            .enumerate()
            .map(|(i, r)| r.normalize(i))
            .collect();
        let ordered: Vec<&str> = display_order(&cards, SortMode::Votes)
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        // a and b tie at +1 and keep their canonical relative order.
        assert_eq!(ordered, vec!["c", "a", "b"]);
    }

    #[test]
    fn reorder_inserts_at_pre_removal_target_index() {
        let mut list = loaded(vec![raw("A", 0, 0), raw("B", 0, 0), raw("C", 0, 0), raw("D", 0, 0)]);
        list.reorder("A", "C").unwrap();
        assert_eq!(ids(&list), vec!["B", "C", "A", "D"]);
    }

    #[test]
    fn reorder_back_is_not_an_identity() {
        let mut list = loaded(vec![raw("A", 0, 0), raw("B", 0, 0), raw("C", 0, 0), raw("D", 0, 0)]);
        list.reorder("A", "C").unwrap();
        list.reorder("C", "A").unwrap();
        assert_eq!(ids(&list), vec!["B", "A", "C", "D"]);
    }

    #[test]
    fn reorder_forces_default_sort() {
        let mut list = loaded(vec![raw("a", 0, 0), raw("b", 5, 0)]);
        list.toggle_sort().unwrap();
        list.reorder("a", "b").unwrap();
        assert_eq!(list.sort_mode(), SortMode::Default);
        assert_eq!(ids(&list), vec!["b", "a"]);
    }

    #[test]
    fn reorder_noops_on_unknown_or_equal_ids() {
        let mut list = loaded(vec![raw("a", 0, 0), raw("b", 0, 0)]);
        list.toggle_sort().unwrap();
        list.reorder("a", "a").unwrap();
        list.reorder("a", "ghost").unwrap();
        list.reorder("ghost", "b").unwrap();
        assert_eq!(ids(&list), vec!["a", "b"]);
        // No-op reorders don't touch the sort mode either.
        assert_eq!(list.sort_mode(), SortMode::Votes);
    }

    #[test]
    fn reorder_rolls_back_when_render_fails() {
        let mut list = CardList::new(FlakyView::default());
        list.load(vec![raw("a", 0, 0), raw("b", 0, 0), raw("c", 0, 0)], true)
            .unwrap();
        list.view.fail = true;
        let err = list.reorder("a", "c");
        assert!(err.is_err());
        assert_eq!(ids(&list), vec!["a", "b", "c"]);

        // Once the view recovers, the rolled-back order renders again.
        list.view.fail = false;
        list.reorder("a", "c").unwrap();
        assert_eq!(list.view.last_order, vec!["b", "c", "a"]);
    }

    #[test]
    fn add_assigns_fresh_id_and_resets_votes() {
        let mut list = loaded(vec![]);
        let id = list
            .add(CardData {
                title: "X".into(),
                votes: Some(Votes { up: 99, down: 4 }),
                user_vote: Some(VoteDirection::Up),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(list.len(), 1);
        let card = list.card(&id).unwrap();
        assert!(card.id.starts_with("card_"));
        assert_eq!(card.votes, Votes::default());
        assert_eq!(card.user_vote, None);
    }

    #[test]
    fn added_ids_are_unique() {
        let mut list = loaded(vec![]);
        let a = list.add(CardData::default()).unwrap();
        let b = list.add(CardData::default()).unwrap();
        let c = list.add(CardData::default()).unwrap();
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_ne!(a, c);
    }

    #[test]
    fn remove_unknown_id_leaves_collection_unchanged() {
        let mut list = loaded(vec![raw("a", 1, 0), raw("b", 0, 1)]);
        let before = list.get_all();
        list.remove("ghost").unwrap();
        assert_eq!(list.get_all(), before);
        list.remove("a").unwrap();
        assert_eq!(ids(&list), vec!["b"]);
    }

    #[test]
    fn update_merges_and_patches_incrementally() {
        let mut list = loaded(vec![raw("a", 2, 0), raw("b", 0, 0)]);
        list.update(
            "a",
            CardPatch {
                description: Some("more detail".into()),
                ..Default::default()
            },
        )
        .unwrap();
        let card = list.card("a").unwrap();
        assert_eq!(card.description, "more detail");
        assert_eq!(card.votes, Votes { up: 2, down: 0 });
        assert_eq!(list.view.events.last(), Some(&Event::Patch("a".into())));

        // Touching votes while sorted by votes forces a full refresh.
        list.toggle_sort().unwrap();
        list.update(
            "a",
            CardPatch {
                votes: Some(Votes { up: 0, down: 0 }),
                ..Default::default()
            },
        )
        .unwrap();
        assert!(matches!(list.view.events.last(), Some(Event::Full(_))));
    }

    #[test]
    fn reset_restores_last_origin_snapshot() {
        let mut list = loaded(vec![raw("a", 1, 0), raw("b", 2, 0)]);
        let new_id = list
            .add(CardData {
                title: "new".into(),
                ..Default::default()
            })
            .unwrap();
        list.remove("a").unwrap();
        list.vote("b", VoteDirection::Down).unwrap();
        list.reorder("b", &new_id).unwrap();
        list.toggle_sort().unwrap();

        list.reset().unwrap();
        assert_eq!(ids(&list), vec!["a", "b"]);
        assert_eq!(list.card("b").unwrap().votes, Votes { up: 2, down: 0 });
        assert_eq!(list.sort_mode(), SortMode::Default);
    }

    #[test]
    fn reset_without_origin_empties_the_collection() {
        let mut list = CardList::new(RecordingView::default());
        list.load(vec![raw("a", 0, 0)], false).unwrap();
        assert!(!list.has_origin());
        list.reset().unwrap();
        assert!(list.is_empty());
    }

    #[test]
    fn get_all_is_a_defensive_copy() {
        let list = loaded(vec![raw("a", 0, 0)]);
        let mut copy = list.get_all();
        copy[0].title = "mutated".into();
        assert_eq!(list.card("a").unwrap().title, "A");
    }
}
