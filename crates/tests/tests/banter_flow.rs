use std::sync::Arc;

use lagoon_agents::BanterAgent;
use lagoon_annotate::LexiconAnnotator;
use lagoon_core::FirstChoice;
use lagoon_observability::AppMetrics;
use lagoon_storage::MemoryStore;

fn deterministic_agent() -> BanterAgent<MemoryStore> {
    BanterAgent::new(
        Arc::new(LexiconAnnotator),
        Arc::new(FirstChoice),
        Arc::new(MemoryStore::new()),
        AppMetrics::shared(),
    )
}

#[test]
fn empty_utterance_yields_an_empty_reply() {
    let agent = deterministic_agent();
    assert_eq!(agent.respond("").expect("respond"), "");
}

#[test]
fn wh_question_gets_a_hedged_deferral() {
    let agent = deterministic_agent();
    let reply = agent.respond("What is your name?").expect("respond");

    assert!(reply.starts_with("I don't know what"), "got {reply:?}");
    assert!(reply.contains("my name"));
    assert!(reply.ends_with("Please check in with me again later."));
}

#[test]
fn yes_no_question_flips_the_point_of_view() {
    let agent = deterministic_agent();
    let reply = agent.respond("Can you swim?").expect("respond");

    assert_eq!(
        reply,
        "I don't know whether I can swim at this very moment. Let me find out."
    );
}

#[test]
fn instruction_is_acknowledged_and_echoed() {
    let agent = deterministic_agent();
    let reply = agent.respond("Please bring two towels.").expect("respond");

    assert_eq!(
        reply,
        "Understood: Please bring two towels. What do you think about that?"
    );
}

#[test]
fn wish_is_acknowledged_with_swapped_person() {
    let agent = deterministic_agent();
    let reply = agent
        .respond("I would like a sea view room.")
        .expect("respond");

    assert_eq!(
        reply,
        "Understood: you would like a sea view room. I'll see what I can do."
    );
}

#[test]
fn statement_echoes_back_unchanged() {
    let agent = deterministic_agent();
    let reply = agent.respond("The sun is shining.").expect("respond");

    assert_eq!(reply, "The sun is shining.");
}

#[test]
fn fragments_concatenate_across_sentences() {
    let agent = deterministic_agent();

    let first = agent.respond("The sun is shining.").expect("respond");
    let second = agent.respond("The rain is falling.").expect("respond");
    let both = agent
        .respond("The sun is shining. The rain is falling.")
        .expect("respond");

    assert_eq!(both, format!("{first}{second}"));
}

#[tokio::test]
async fn booking_happy_path_through_the_agent() {
    let agent = deterministic_agent();

    let exchange = agent.begin_booking().await.expect("begin");
    assert!(!exchange.complete);
    assert!(exchange.messages[0].contains("Welcome to Blue Lagoon Resort"));

    let booking_id = exchange.booking_id;
    let answers = [
        "Port Elizabeth",
        "6",
        "Tropical House",
        "2026-04-10",
        "2",
        "0821234567",
        "yes",
        "halal",
        "yes",
    ];

    let mut complete = false;
    for answer in answers {
        let exchange = agent
            .booking_reply(&booking_id, answer)
            .await
            .expect("booking reply");
        complete = exchange.complete;
    }
    assert!(complete);

    assert!(agent.booking_reply("missing", "hello").await.is_err());
}
