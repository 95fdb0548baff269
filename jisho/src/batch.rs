//! Batch processing of command-line tokens

use std::io::Write;

use tracing::{debug, info, warn};
use weblio::{Chooser, Document, LookupResult, Profile};

use crate::Error;
use crate::cli::Token;
use crate::store::{Accumulator, Clipboard, Store};

/// Tally of the terms processed by [`Runner::run`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Terms with a rendered entry
    pub found: usize,
    /// Terms the dictionary had no entry for
    pub not_found: usize,
    /// Terms where the user declined to choose a headword
    pub cancelled: usize,
    /// Terms whose result page could not be fetched
    pub failed: usize,
}

/// Looks up terms one after another and collects the definitions in a [`Store`].
pub struct Runner {
    client: weblio::Client,
    store: Store,
    profile: Profile,
    persist: bool,
}

impl Runner {
    /// Creates a runner that looks terms up in the `profile` dictionary.
    #[must_use]
    pub const fn new(client: weblio::Client, store: Store, profile: Profile) -> Runner {
        Runner {
            client,
            store,
            profile,
            persist: true,
        }
    }

    /// Sets whether found definitions are appended to the store, or only printed.
    #[must_use]
    pub const fn persist(mut self, persist: bool) -> Runner {
        self.persist = persist;
        self
    }

    /// Processes `tokens` in order, writing everything meant for the user to `out`.
    ///
    /// Definitions found so far are written to the store before each command token and once all
    /// tokens are processed, so `list` and `cut` see the terms that came before them.
    ///
    /// # Errors
    ///
    /// Returns an error if the store or clipboard can't be accessed, or if `out` can't be written.
    /// A term that can't be fetched is reported to `out` and doesn't stop the batch.
    pub async fn run<C, K, W>(
        &self,
        tokens: &[Token],
        chooser: &mut C,
        clipboard: &mut K,
        out: &mut W,
    ) -> Result<Summary, Error>
    where
        C: Chooser + ?Sized,
        K: Clipboard,
        W: Write,
    {
        let mut summary = Summary::default();
        let mut accumulator = Accumulator::new();

        for token in tokens {
            match token {
                Token::Term(term) => {
                    self.look_up(term, chooser, out, &mut summary, &mut accumulator)
                        .await?;
                }
                Token::Clear => {
                    self.flush(&mut accumulator)?;
                    self.store.clear()?;
                }
                Token::List => {
                    self.flush(&mut accumulator)?;

                    let contents = self.store.read()?;

                    if contents.is_empty() {
                        writeln!(out, "\nThere's no definitions to show!\n")?;
                    } else {
                        writeln!(out, "\n{contents}\n")?;
                    }
                }
                Token::Cut => {
                    self.flush(&mut accumulator)?;
                    self.store.cut(clipboard)?;
                }
            }
        }

        self.flush(&mut accumulator)?;

        info!(
            found = summary.found,
            not_found = summary.not_found,
            cancelled = summary.cancelled,
            failed = summary.failed,
            "batch finished"
        );

        Ok(summary)
    }

    async fn look_up<C, W>(
        &self,
        term: &str,
        chooser: &mut C,
        out: &mut W,
        summary: &mut Summary,
        accumulator: &mut Accumulator,
    ) -> Result<(), Error>
    where
        C: Chooser + ?Sized,
        W: Write,
    {
        let body = match self.client.fetch(term).await {
            Ok(body) => body,
            Err(err) => {
                warn!(term, %err, "could not fetch result page");
                summary.failed += 1;

                writeln!(out, "\nCould not look up '{term}' on weblio: {err}\n")?;

                return Ok(());
            }
        };

        let result = {
            let document = Document::from_html(body);

            weblio::lookup(&document, self.profile, term, chooser)
        };

        match result {
            LookupResult::Found(html) => {
                summary.found += 1;

                writeln!(out, "\n{html}\n")?;
                accumulator.push(html);
            }
            LookupResult::NotFound => {
                summary.not_found += 1;

                writeln!(
                    out,
                    "\nNo {name} definitions found for '{term}'. Try another term or check your input.",
                    name = self.profile.display_name()
                )?;
                writeln!(
                    out,
                    "Check weblio results for other dictionary definitions: {url}\n",
                    url = self.client.url_for(term)
                )?;
            }
            LookupResult::Cancelled => {
                debug!(term, "lookup cancelled");
                summary.cancelled += 1;
            }
        }

        Ok(())
    }

    fn flush(&self, accumulator: &mut Accumulator) -> Result<(), Error> {
        if self.persist {
            self.store.flush(accumulator)?;
        } else if !accumulator.is_empty() {
            debug!(num = accumulator.len(), "discarding definitions in print-only mode");

            *accumulator = Accumulator::new();
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use weblio::Choice;

    use super::*;

    const NEKO: &str = include_str!("../../weblio/tests/fixtures/neko.html");
    const HASHI: &str = include_str!("../../weblio/tests/fixtures/hashi.html");
    const KAMI: &str = include_str!("../../weblio/tests/fixtures/kami.html");
    const NO_SECTION: &str = include_str!("../../weblio/tests/fixtures/no_section.html");

    #[derive(Default)]
    struct MemoryClipboard(Option<String>);

    impl Clipboard for MemoryClipboard {
        fn set_text(&mut self, text: String) -> Result<(), Error> {
            self.0 = Some(text);

            Ok(())
        }
    }

    /// Serves `pages` keyed by request path on a local port and returns the base URL.
    ///
    /// Unknown paths get a 404.
    async fn serve(pages: HashMap<String, &'static str>) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local addr");

        tokio::spawn(async move {
            while let Ok((mut stream, _)) = listener.accept().await {
                let mut request = Vec::new();
                let mut buf = [0u8; 1024];

                while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                    match stream.read(&mut buf).await {
                        Ok(0) | Err(_) => break,
                        Ok(n) => request.extend_from_slice(&buf[..n]),
                    }
                }

                let request = String::from_utf8_lossy(&request);
                let path = request.split_whitespace().nth(1).unwrap_or("/");
                let (status, body) = match pages.get(path) {
                    Some(body) => ("200 OK", *body),
                    None => ("404 Not Found", ""),
                };
                let response = format!(
                    "HTTP/1.1 {status}\r\ncontent-type: text/html; charset=utf-8\r\ncontent-length: {len}\r\nconnection: close\r\n\r\n{body}",
                    len = body.len()
                );

                let _ = stream.write_all(response.as_bytes()).await;
                let _ = stream.shutdown().await;
            }
        });

        format!("http://{addr}")
    }

    async fn runner(profile: Profile) -> (tempfile::TempDir, Runner) {
        let pages = HashMap::from([
            ("/content/%E7%8C%AB".to_string(), NEKO),
            ("/content/%E6%A9%8B".to_string(), HASHI),
            ("/content/%E3%81%8B%E3%81%BF".to_string(), KAMI),
            ("/content/%E7%8A%AC".to_string(), NO_SECTION),
        ]);
        let base_url = serve(pages).await;
        let client = weblio::Client::with_client(reqwest::Client::new()).with_base_url(base_url);
        let dir = tempfile::tempdir().expect("temp dir");
        let store = Store::new(dir.path().join("definitions.txt"));

        (dir, Runner::new(client, store, profile))
    }

    fn terms(terms: &[&str]) -> Vec<Token> {
        terms.iter().filter_map(|term| Token::parse(term)).collect()
    }

    fn never(_: &[String]) -> Choice {
        panic!("chooser must not be asked");
    }

    #[tokio::test]
    async fn found_definitions_are_printed_and_stored() {
        let (_dir, runner) = runner(Profile::Daijirin).await;
        let mut out = Vec::new();

        let summary = runner
            .run(
                &terms(&["猫", "橋"]),
                &mut never,
                &mut MemoryClipboard::default(),
                &mut out,
            )
            .await
            .expect("batch");

        assert_eq!(summary.found, 2);

        let stored = runner.store.read().expect("read");
        let output = String::from_utf8(out).expect("utf-8 output");

        assert!(stored.starts_with("【猫】"));
        assert!(stored.contains("\n\n<div>【橋】"));
        assert!(stored.ends_with("</div>"));
        assert!(output.contains("【猫】"));
        assert!(output.contains("【橋】"));
    }

    #[tokio::test]
    async fn misses_and_failures_do_not_stop_the_batch() {
        let (_dir, runner) = runner(Profile::Daijirin).await;
        let mut out = Vec::new();

        let summary = runner
            .run(
                &terms(&["犬", "鳥", "猫"]),
                &mut never,
                &mut MemoryClipboard::default(),
                &mut out,
            )
            .await
            .expect("batch");

        assert_eq!(
            summary,
            Summary {
                found: 1,
                not_found: 1,
                cancelled: 0,
                failed: 1,
            }
        );

        let output = String::from_utf8(out).expect("utf-8 output");

        assert!(output.contains(
            "No 大辞林 definitions found for '犬'. Try another term or check your input."
        ));
        assert!(output.contains("/content/%E7%8A%AC"));
        assert!(output.contains("Could not look up '鳥'"));
    }

    #[tokio::test]
    async fn chooser_picks_the_headword() {
        let (_dir, runner) = runner(Profile::Daijirin).await;
        let mut asked = 0;
        let mut chooser = |labels: &[String]| {
            asked += 1;
            assert_eq!(labels.len(), 3);

            Choice::Index(2)
        };

        runner
            .run(
                &terms(&["かみ"]),
                &mut chooser,
                &mut MemoryClipboard::default(),
                &mut Vec::new(),
            )
            .await
            .expect("batch");

        assert_eq!(asked, 1);
        assert!(runner.store.read().expect("read").contains("paper"));
    }

    #[tokio::test]
    async fn cancelled_lookups_print_nothing() {
        let (_dir, runner) = runner(Profile::Daijirin).await;
        let mut out = Vec::new();

        let summary = runner
            .run(
                &terms(&["かみ"]),
                &mut |_: &[String]| Choice::Cancel,
                &mut MemoryClipboard::default(),
                &mut out,
            )
            .await
            .expect("batch");

        assert_eq!(summary.cancelled, 1);
        assert!(out.is_empty());
        assert_eq!(runner.store.read().expect("read"), "");
    }

    #[tokio::test]
    async fn commands_see_earlier_terms() {
        let (_dir, runner) = runner(Profile::Daijirin).await;
        let mut clipboard = MemoryClipboard::default();
        let mut out = Vec::new();

        runner
            .run(
                &terms(&["list", "猫", "cut", "list"]),
                &mut never,
                &mut clipboard,
                &mut out,
            )
            .await
            .expect("batch");

        let output = String::from_utf8(out).expect("utf-8 output");

        assert!(clipboard.0.expect("clipboard text").starts_with("【猫】"));
        assert_eq!(output.matches("There's no definitions to show!").count(), 2);
        assert_eq!(runner.store.read().expect("read"), "");
    }

    #[tokio::test]
    async fn clear_empties_the_store() {
        let (_dir, runner) = runner(Profile::Daijirin).await;

        runner
            .run(
                &terms(&["猫", "clear", "橋"]),
                &mut never,
                &mut MemoryClipboard::default(),
                &mut Vec::new(),
            )
            .await
            .expect("batch");

        assert!(runner.store.read().expect("read").starts_with("【橋】"));
    }

    #[tokio::test]
    async fn print_only_leaves_the_store_alone() {
        let (_dir, runner) = runner(Profile::Daijirin).await;
        let runner = runner.persist(false);
        let mut out = Vec::new();

        runner
            .run(
                &terms(&["猫"]),
                &mut never,
                &mut MemoryClipboard::default(),
                &mut out,
            )
            .await
            .expect("batch");

        assert!(!out.is_empty());
        assert_eq!(runner.store.read().expect("read"), "");
    }
}
