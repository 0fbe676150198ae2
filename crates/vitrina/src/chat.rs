//! Chat orchestration: the request/response cycle between a customer's
//! free-text query and a ranked product list.
//!
//! One request sequences the whole pipeline against a single external call:
//!
//! ```text
//! user text ─► FilterPrompt ─► provider.generate() ─► parse_filter_reply()
//!           ─► Catalog::resolve() ─► capped ProductHit list ─► chat history
//! ```
//!
//! The session also owns the conversational state the storefront renders: a
//! message history, a transient "thinking" placeholder that is removed once
//! the request settles, and a *generation token* per request so a reply that
//! arrives after the user has already sent a newer query is discarded
//! instead of interleaving stale results.
//!
//! The external call runs under an explicit deadline; expiry degrades to an
//! empty result (the same outcome as the keyword tier finding nothing)
//! rather than an error the customer has to care about.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::time::timeout;
use tracing::{debug, warn};

use vitrina_catalog::{Catalog, Product, parse_filter_reply, schema_descriptor};
use vitrina_core::{Result, TextGenerationProvider, VitrinaError};
use vitrina_prompt::FilterPrompt;

/// How many hits are surfaced per reply by default.  A display policy, not
/// an engine invariant.
pub const DEFAULT_REPLY_LIMIT: usize = 3;

const DEFAULT_CALL_TIMEOUT: Duration = Duration::from_secs(30);

const THINKING_PLACEHOLDER: &str = "Looking through the catalog…";
const LEAD_FOUND: &str = "Here is what I found:";
const LEAD_EMPTY: &str = "I couldn't find any matching products.";
const LEAD_FAILURE: &str = "Something went wrong while processing your request.";

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    User,
    Bot,
}

/// One entry of the conversation history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    fn user(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }

    fn bot(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Bot,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }
}

/// A product surfaced in a chat reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductHit {
    pub id: String,
    pub name: String,
}

impl ProductHit {
    /// Storefront route for this product's detail page.
    pub fn link(&self) -> String {
        format!("/product/{}", self.id)
    }
}

impl From<&Product> for ProductHit {
    fn from(product: &Product) -> Self {
        Self {
            id: product.product_id.clone(),
            name: product.product_name.clone(),
        }
    }
}

/// Outcome of one settled chat request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatReply {
    /// At least one product matched; capped at the session's reply limit.
    Matches(Vec<ProductHit>),
    /// Every tier came up empty (or the external call timed out).
    NoMatches,
    /// A newer query was started before this one settled; nothing was
    /// recorded.
    Superseded,
}

/// An in-flight request: its generation token and the rendered prompt.
#[derive(Debug)]
pub struct PendingQuery {
    generation: u64,
    prompt: String,
}

impl PendingQuery {
    /// The full instruction string that will be sent to the model.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }
}

/// A chat conversation bound to one text-generation backend and one catalog.
pub struct ChatSession<B> {
    provider: Arc<B>,
    catalog: Arc<Catalog>,
    history: Vec<ChatMessage>,
    generation: u64,
    reply_limit: usize,
    call_timeout: Duration,
}

impl<B> ChatSession<B>
where
    B: TextGenerationProvider,
{
    pub fn new(provider: B, catalog: Arc<Catalog>) -> Self {
        Self {
            provider: Arc::new(provider),
            catalog,
            history: Vec::new(),
            generation: 0,
            reply_limit: DEFAULT_REPLY_LIMIT,
            call_timeout: DEFAULT_CALL_TIMEOUT,
        }
    }

    /// Cap the number of hits surfaced per reply.
    pub fn with_reply_limit(mut self, limit: usize) -> Self {
        self.reply_limit = limit;
        self
    }

    /// Deadline for the external text-generation call.
    pub fn with_call_timeout(mut self, call_timeout: Duration) -> Self {
        self.call_timeout = call_timeout;
        self
    }

    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Record the user's message plus the thinking placeholder and hand back
    /// the pending request.  Starting a new request supersedes any earlier
    /// one that has not settled yet.
    pub fn begin(&mut self, query: &str) -> PendingQuery {
        self.history.push(ChatMessage::user(query));
        self.history.push(ChatMessage::bot(THINKING_PLACEHOLDER));
        self.generation += 1;
        PendingQuery {
            generation: self.generation,
            prompt: FilterPrompt::new(query).render(schema_descriptor()),
        }
    }

    /// Run the model call and the resolution pipeline for `pending`.
    ///
    /// Does not touch the history; feed the outcome to [`Self::settle`].
    pub async fn run(&self, pending: &PendingQuery) -> Result<Vec<ProductHit>> {
        let reply = timeout(
            self.call_timeout,
            self.provider.generate(pending.prompt.clone()),
        )
        .await
        .map_err(|_| VitrinaError::Timeout(self.call_timeout))??;

        let filters = parse_filter_reply(&reply)?;
        debug!(filters = filters.len(), "parsed filter mapping");

        let hits: Vec<ProductHit> = self
            .catalog
            .resolve(&filters)
            .into_iter()
            .map(ProductHit::from)
            .collect();
        debug!(hits = hits.len(), "filter resolution finished");
        Ok(hits)
    }

    /// Fold a finished request back into the conversation.
    ///
    /// Stale requests (a newer [`Self::begin`] happened in between) leave
    /// the history untouched and report [`ChatReply::Superseded`].  On every
    /// other path the thinking placeholder is removed first, so the
    /// conversation never stays stuck "in progress".
    pub fn settle(
        &mut self,
        pending: PendingQuery,
        outcome: Result<Vec<ProductHit>>,
    ) -> Result<ChatReply> {
        if pending.generation != self.generation {
            debug!(
                stale = pending.generation,
                current = self.generation,
                "discarding superseded reply"
            );
            return Ok(ChatReply::Superseded);
        }

        self.drop_placeholder();

        match outcome {
            Ok(hits) if !hits.is_empty() => {
                let hits: Vec<ProductHit> = hits.into_iter().take(self.reply_limit).collect();
                self.history.push(ChatMessage::bot(LEAD_FOUND));
                for hit in &hits {
                    self.history
                        .push(ChatMessage::bot(format!("{} ({})", hit.name, hit.link())));
                }
                Ok(ChatReply::Matches(hits))
            }
            Ok(_) => {
                self.history.push(ChatMessage::bot(LEAD_EMPTY));
                Ok(ChatReply::NoMatches)
            }
            Err(VitrinaError::Timeout(limit)) => {
                warn!(?limit, "generation call timed out, degrading to empty result");
                self.history.push(ChatMessage::bot(LEAD_EMPTY));
                Ok(ChatReply::NoMatches)
            }
            Err(err) => {
                self.history.push(ChatMessage::bot(LEAD_FAILURE));
                Err(err)
            }
        }
    }

    /// One full request/response cycle: [`Self::begin`] → [`Self::run`] →
    /// [`Self::settle`].
    pub async fn ask(&mut self, query: &str) -> Result<ChatReply> {
        let pending = self.begin(query);
        let outcome = self.run(&pending).await;
        self.settle(pending, outcome)
    }

    /// Only the trailing message is ever the placeholder of the *current*
    /// request; older placeholders stay where superseded requests left them.
    fn drop_placeholder(&mut self) {
        let is_placeholder = self
            .history
            .last()
            .is_some_and(|m| m.sender == Sender::Bot && m.text == THINKING_PLACEHOLDER);
        if is_placeholder {
            self.history.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future;
    use std::pin::Pin;
    use vitrina_core::VitrinaClient;

    /// Replies with the same canned text for every prompt.
    struct CannedProvider(&'static str);

    impl TextGenerationProvider for CannedProvider {
        fn generate<'a, 'p>(
            &'a self,
            _prompt: String,
        ) -> Pin<Box<dyn Future<Output = Result<String>> + Send + 'p>>
        where
            'a: 'p,
        {
            let reply = self.0.to_owned();
            Box::pin(async move { Ok(reply) })
        }
    }

    /// Never resolves; forces the call timeout.
    struct StalledProvider;

    impl TextGenerationProvider for StalledProvider {
        fn generate<'a, 'p>(
            &'a self,
            _prompt: String,
        ) -> Pin<Box<dyn Future<Output = Result<String>> + Send + 'p>>
        where
            'a: 'p,
        {
            Box::pin(future::pending::<Result<String>>())
        }
    }

    fn session(reply: &'static str) -> ChatSession<CannedProvider> {
        ChatSession::new(CannedProvider(reply), Catalog::bundled())
    }

    #[tokio::test]
    async fn ask_surfaces_capped_hits_and_records_history() {
        // "line" matches both Northline and Harborline products strictly:
        // four hits, capped at the default three.
        let mut chat = session("```json\n{ \"brand\": \"line\" }\n```");
        let reply = chat.ask("something from a -line brand").await.unwrap();

        let ChatReply::Matches(hits) = reply else {
            panic!("expected matches, got {reply:?}");
        };
        let ids: Vec<&str> = hits.iter().map(|h| h.id.as_str()).collect();
        assert_eq!(ids, vec!["p-1001", "p-1003", "p-1004"]);
        assert_eq!(hits[0].link(), "/product/p-1001");

        let texts: Vec<&str> = chat.history().iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts[0], "something from a -line brand");
        assert_eq!(texts[1], LEAD_FOUND);
        assert_eq!(chat.history().len(), 5);
        assert!(!texts.contains(&THINKING_PLACEHOLDER));
    }

    #[tokio::test]
    async fn empty_mapping_is_a_vacuous_and() {
        let mut chat = session("{}").with_reply_limit(2);
        let reply = chat.ask("show me everything").await.unwrap();

        let ChatReply::Matches(hits) = reply else {
            panic!("expected matches, got {reply:?}");
        };
        // the whole catalog matches; only the first two are surfaced
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].id, "p-1001");
    }

    #[tokio::test]
    async fn unmatched_filters_reply_no_products() {
        let mut chat = session("{ \"productName\": \"zeppelin\" }");
        let reply = chat.ask("a zeppelin, please").await.unwrap();

        assert_eq!(reply, ChatReply::NoMatches);
        assert_eq!(chat.history().last().unwrap().text, LEAD_EMPTY);
    }

    #[tokio::test]
    async fn malformed_reply_fails_and_clears_placeholder() {
        let mut chat = session("sorry, I cannot help with that");
        let err = chat.ask("red polo").await.unwrap_err();

        assert!(matches!(err, VitrinaError::ResponseParse { .. }));
        assert_eq!(chat.history().last().unwrap().text, LEAD_FAILURE);
        assert!(
            chat.history()
                .iter()
                .all(|m| m.text != THINKING_PLACEHOLDER)
        );
    }

    #[tokio::test]
    async fn stale_reply_is_discarded() {
        let mut chat = session("{}");
        let first = chat.begin("first query");
        let second = chat.begin("second query");
        assert!(second.prompt().contains("\"second query\""));
        let before = chat.history().len();

        let late = chat.settle(
            first,
            Ok(vec![ProductHit {
                id: "p-1001".into(),
                name: "Classic Polo Shirt".into(),
            }]),
        );
        assert_eq!(late.unwrap(), ChatReply::Superseded);
        assert_eq!(chat.history().len(), before);

        // the current request still settles normally
        let outcome = chat.run(&second).await;
        assert!(matches!(
            chat.settle(second, outcome).unwrap(),
            ChatReply::Matches(_)
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn timeout_degrades_to_no_matches() {
        let mut chat = ChatSession::new(StalledProvider, Catalog::bundled())
            .with_call_timeout(Duration::from_secs(1));
        let reply = chat.ask("anything").await.unwrap();

        assert_eq!(reply, ChatReply::NoMatches);
        assert_eq!(chat.history().last().unwrap().text, LEAD_EMPTY);
    }

    #[tokio::test]
    async fn works_through_the_generic_client() {
        let client = VitrinaClient::new(CannedProvider("{ \"brand\": \"Stride\" }"));
        let mut chat = ChatSession::new(client, Catalog::bundled());
        let reply = chat.ask("stride shoes").await.unwrap();

        let ChatReply::Matches(hits) = reply else {
            panic!("expected matches, got {reply:?}");
        };
        let ids: Vec<&str> = hits.iter().map(|h| h.id.as_str()).collect();
        assert_eq!(ids, vec!["p-1002", "p-1006"]);
    }
}
