use eyre::Result;
use std::path::PathBuf;
use std::process::Command;
use store::client::Client;
use store::message::store::Store as MessageStore;
use store::transfer_event::store::Store as EventStore;

const PRIMITIVES: &str = r#"{"kind":"block","header":{"height":5200}}
{"kind":"message","idx":0,"block":{"header":{"height":5200}},"tx":{"hash":"T1"},"msg":{"typeUrl":"/cosmos.bank.v1beta1.MsgSend","decodedMsg":{"fromAddress":"alice","toAddress":"bob","amount":[{"denom":"atom","amount":"5"}]}}}

{"kind":"message","idx":1,"block":{"header":{"height":5200}},"tx":{"hash":"T1"},"msg":{"typeUrl":"/cosmos.staking.v1beta1.MsgDelegate","decodedMsg":{}}}
{"kind":"event","idx":2,"block":{"header":{"height":5200}},"tx":{"hash":"T1"},"msg":{"idx":0},"event":{"type":"transfer","attributes":[{"key":"recipient","value":"bob"},{"key":"sender","value":"alice"},{"key":"amount","value":"5atom"}]}}
"#;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("cosmos-indexer-{name}-{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn replay(db_url: &str, input: &PathBuf) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_cosmos-indexer"))
        .args(["replay", "--db-url", db_url, "--input"])
        .arg(input)
        .output()
        .unwrap()
}

#[tokio::test]
async fn test_replay_persists_records() -> Result<()> {
    let dir = scratch_dir("persist");
    let input = dir.join("primitives.jsonl");
    std::fs::write(&input, PRIMITIVES)?;
    let db_url = format!("sqlite://{}?mode=rwc", dir.join("index.db").display());

    let output = replay(&db_url, &input);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let client = Client::init(&db_url).await?;
    let message = MessageStore::new(client.clone()).get_transfer_message("T1-0").await?.unwrap();
    assert_eq!(message.amount, r#"[{"denom":"atom","amount":"5"}]"#);
    assert!(MessageStore::new(client.clone()).get_transfer_message("T1-1").await?.is_none());

    let event = EventStore::new(client).get_transfer_event("T1-0-2").await?.unwrap();
    assert_eq!(event.sender.as_deref(), Some("alice"));
    assert_eq!(event.recipient.as_deref(), Some("bob"));
    assert_eq!(event.amount.as_deref(), Some("5atom"));

    // replaying the same file is a no-op
    let output = replay(&db_url, &input);
    assert!(output.status.success());

    Ok(())
}

#[test]
fn test_replay_stops_on_malformed_message() -> Result<()> {
    let dir = scratch_dir("malformed");
    let input = dir.join("primitives.jsonl");
    std::fs::write(
        &input,
        r#"{"kind":"message","idx":0,"block":{"header":{"height":1}},"tx":{"hash":"T1"},"msg":{"typeUrl":"/cosmos.bank.v1beta1.MsgSend","decodedMsg":{"fromAddress":"alice"}}}"#,
    )?;
    let db_url = format!("sqlite://{}?mode=rwc", dir.join("index.db").display());

    let output = replay(&db_url, &input);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("line 1"), "{stderr}");
    Ok(())
}
