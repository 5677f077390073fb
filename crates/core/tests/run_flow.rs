use cardplay_core::{
    Event, EventBus, GameConfig, HandKind, RngState, RunError, RunState, TableCards,
};

fn start(config: GameConfig, seed: u64) -> (RunState, EventBus) {
    let mut events = EventBus::default();
    let state =
        RunState::new(config, &mut RngState::from_seed(seed), &mut events).expect("new run");
    events.drain().for_each(drop);
    (state, events)
}

fn select_first(state: &RunState, count: usize, events: &mut EventBus) -> RunState {
    let picks: Vec<_> = state.hand().iter().take(count).copied().collect();
    picks.into_iter().fold(state.clone(), |acc, card| {
        acc.select(card, events).expect("select")
    })
}

#[test]
fn play_scores_table_and_refills() {
    let (state, mut events) = start(GameConfig::default(), 7);
    let picked = select_first(&state, 5, &mut events);
    let expected = TableCards::new(picked.table().cards().as_slice().to_vec()).score();
    events.drain().for_each(drop);

    let played = picked.play(&mut events).expect("play");
    assert_eq!(played.score(), expected);
    assert_eq!(played.plays_left(), 2);
    assert_eq!(played.discards_left(), 3);
    assert_eq!(played.hand().len(), 8);
    assert_eq!(played.deck().len(), 39);
    assert!(played.table().is_empty());
    for card in picked.table().cards() {
        assert!(!played.hand().contains(*card));
    }

    let drained: Vec<Event> = events.drain().collect();
    assert!(matches!(
        drained.first(),
        Some(Event::HandScored { score, total, .. }) if *score == expected && *total == expected
    ));
    assert_eq!(
        drained.get(1),
        Some(&Event::HandDealt {
            count: 5,
            deck_left: 39
        })
    );
    // the snapshot it came from is untouched
    assert_eq!(picked.table().len(), 5);
    assert_eq!(picked.score(), 0);
}

#[test]
fn select_toggles_membership() {
    let (state, mut events) = start(GameConfig::default(), 8);
    let card = state.hand().get(0).expect("dealt");
    let on = state.select(card, &mut events).expect("select");
    assert!(on.is_selected(card));
    let off = on.select(card, &mut events).expect("deselect");
    assert!(!off.is_selected(card));
    assert_eq!(
        events.drain().collect::<Vec<_>>(),
        vec![
            Event::CardSelected {
                card,
                selected: true
            },
            Event::CardSelected {
                card,
                selected: false
            },
        ]
    );
}

#[test]
fn selection_is_capped() {
    let (state, mut events) = start(GameConfig::default(), 9);
    let full = select_first(&state, 5, &mut events);
    let sixth = full.hand().get(5).expect("dealt");
    assert_eq!(
        full.select(sixth, &mut events).err(),
        Some(RunError::SelectionFull(5))
    );
}

#[test]
fn play_and_discard_need_a_selection() {
    let (state, mut events) = start(GameConfig::default(), 10);
    assert_eq!(state.play(&mut events).err(), Some(RunError::EmptySelection));
    assert_eq!(
        state.discard(&mut events).err(),
        Some(RunError::EmptySelection)
    );
}

#[test]
fn discard_spends_budget_without_scoring() {
    let config = GameConfig {
        discards: 1,
        ..GameConfig::default()
    };
    let (state, mut events) = start(config, 11);
    let discarded = select_first(&state, 3, &mut events)
        .discard(&mut events)
        .expect("discard");
    assert_eq!(discarded.score(), 0);
    assert_eq!(discarded.discards_left(), 0);
    assert_eq!(discarded.hand().len(), 8);
    assert_eq!(discarded.deck().len(), 41);

    let again = select_first(&discarded, 1, &mut events);
    assert_eq!(
        again.discard(&mut events).err(),
        Some(RunError::NoDiscardsLeft)
    );
}

#[test]
fn last_play_ends_round() {
    let config = GameConfig {
        plays: 1,
        ..GameConfig::default()
    };
    let (state, mut events) = start(config, 12);
    let done = select_first(&state, 2, &mut events)
        .play(&mut events)
        .expect("play");
    assert!(done.is_over());
    assert!(events
        .drain()
        .any(|event| event == Event::RoundOver { score: done.score() }));
    let card = done.hand().get(0).expect("hand kept");
    assert_eq!(
        done.select(card, &mut events).err(),
        Some(RunError::RoundOver)
    );
}

#[test]
fn exhausting_the_deck_stops_the_deal() {
    let config = GameConfig {
        plays: u8::MAX,
        ..GameConfig::default()
    };
    let (mut state, mut events) = start(config, 13);
    let mut played = 0usize;
    while !state.is_over() {
        let take = state.hand().len().min(5);
        played += take;
        state = select_first(&state, take, &mut events)
            .play(&mut events)
            .expect("play");
    }
    assert_eq!(played, 52);
    assert!(state.deck().is_empty());
    assert!(state.hand().is_empty());
    assert!(events
        .drain()
        .any(|event| matches!(event, Event::RoundOver { .. })));
}

#[test]
fn discarding_the_whole_deck_ends_round() {
    let config = GameConfig {
        discards: u8::MAX,
        ..GameConfig::default()
    };
    let (mut state, mut events) = start(config, 1);
    let mut round_over = Vec::new();
    while !state.is_over() {
        let take = state.hand().len().min(5);
        state = select_first(&state, take, &mut events)
            .discard(&mut events)
            .expect("discard");
        round_over.extend(
            events
                .drain()
                .filter(|event| matches!(event, Event::RoundOver { .. })),
        );
    }
    assert_eq!(state.plays_left(), 3);
    assert!(state.hand().is_empty());
    assert!(state.deck().is_empty());
    assert_eq!(round_over, vec![Event::RoundOver { score: 0 }]);
}

#[test]
fn custom_base_scores_apply_to_plays() {
    let mut config = GameConfig::default();
    for rule in &mut config.hands {
        rule.base = 0;
    }
    let (state, mut events) = start(config, 14);
    let picked = select_first(&state, 1, &mut events);
    let card = picked.table().cards().get(0).expect("picked");
    assert_eq!(picked.table().kind(), HandKind::HighCard);
    let played = picked.play(&mut events).expect("play");
    assert_eq!(played.score(), i64::from(card.rank.value()));
}
