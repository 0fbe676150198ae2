//! End-to-end chat request against the real OpenAI backend.
//!
//! ```bash
//! OPENAI_API_KEY=sk-… cargo run --example chat_demo -- "a red polo shirt, size M"
//! ```

use vitrina::catalog::Catalog;
use vitrina::chat::{ChatReply, ChatSession};
use vitrina::openai::OpenAiAdapterBuilder;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let query = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    let query = if query.is_empty() {
        "a red polo shirt, size M".to_owned()
    } else {
        query
    };

    let backend = OpenAiAdapterBuilder::new_from_env().build()?;
    let mut chat = ChatSession::new(backend, Catalog::bundled());

    match chat.ask(&query).await? {
        ChatReply::Matches(hits) => {
            for hit in hits {
                println!("{} -> {}", hit.name, hit.link());
            }
        }
        ChatReply::NoMatches => println!("no products found"),
        ChatReply::Superseded => unreachable!("single request cannot be superseded"),
    }

    Ok(())
}
