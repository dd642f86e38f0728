//! Tests for the prompt -> response command flow

use std::sync::Mutex;

use rstest::rstest;

use claude_ask::cli::commands::run;
use claude_ask::infrastructure::traits::QueryClient;
use claude_ask::infrastructure::{InfraError, InfraResult};
use claude_ask::util::testing;

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

/// Stub client returning a fixed response for any prompt.
struct FixedClient {
    response: &'static str,
}

impl QueryClient for FixedClient {
    fn query(&self, _prompt: &str) -> InfraResult<String> {
        Ok(self.response.to_string())
    }
}

/// Stub client failing with a fixed description.
struct FailingClient {
    message: &'static str,
}

impl QueryClient for FailingClient {
    fn query(&self, _prompt: &str) -> InfraResult<String> {
        Err(InfraError::Client {
            message: self.message.to_string(),
            exit_code: Some(1),
        })
    }
}

/// Stub client recording the prompt it was given.
#[derive(Default)]
struct RecordingClient {
    seen: Mutex<Option<String>>,
}

impl QueryClient for RecordingClient {
    fn query(&self, prompt: &str) -> InfraResult<String> {
        *self.seen.lock().unwrap() = Some(prompt.to_string());
        Ok("ok".to_string())
    }
}

fn run_captured(args: &[&str], client: &dyn QueryClient) -> (i32, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run(args.iter().copied(), client, &mut out, &mut err);
    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

// ============================================================
// Missing argument
// ============================================================

#[test]
fn given_no_prompt_when_run_then_error_line_and_exit_1() {
    let (code, out, err) = run_captured(&["claude-ask"], &FixedClient { response: "unused" });

    assert_eq!(code, 1);
    assert_eq!(out, "");
    assert_eq!(err, "Error: No prompt provided\n");
}

// ============================================================
// Success passthrough
// ============================================================

#[test]
fn given_stub_response_when_run_then_stdout_verbatim_and_exit_0() {
    let client = FixedClient {
        response: "Hello, world!",
    };
    let (code, out, err) = run_captured(&["claude-ask", "hi"], &client);

    assert_eq!(code, 0);
    assert_eq!(out, "Hello, world!\n");
    assert_eq!(err, "");
}

#[test]
fn given_multiline_response_when_run_then_single_trailing_newline_added() {
    let client = FixedClient {
        response: "line one\nline two",
    };
    let (code, out, _) = run_captured(&["claude-ask", "hi"], &client);

    assert_eq!(code, 0);
    assert_eq!(out, "line one\nline two\n");
}

// ============================================================
// Fault mapping
// ============================================================

#[test]
fn given_failing_client_when_run_then_stderr_description_and_exit_1() {
    let client = FailingClient {
        message: "rate limited",
    };
    let (code, out, err) = run_captured(&["claude-ask", "hi"], &client);

    assert_eq!(code, 1);
    assert_eq!(out, "");
    assert_eq!(err, "Error: rate limited\n");
}

#[test]
fn given_same_fault_when_run_repeatedly_then_output_byte_identical() {
    let client = FailingClient {
        message: "rate limited",
    };

    let first = run_captured(&["claude-ask", "any prompt"], &client);
    let second = run_captured(&["claude-ask", "any prompt"], &client);

    assert_eq!(first, second);
}

// ============================================================
// Prompt delivered verbatim
// ============================================================

#[rstest]
#[case("hi")]
#[case("")]
#[case("  leading and trailing  ")]
#[case("what's \"quoted\"? and\nmultiline")]
fn given_prompt_when_run_then_delivered_verbatim(#[case] prompt: &str) {
    let client = RecordingClient::default();
    let (code, _, _) = run_captured(&["claude-ask", prompt], &client);

    assert_eq!(code, 0);
    assert_eq!(client.seen.lock().unwrap().as_deref(), Some(prompt));
}

// ============================================================
// Exit code exhaustiveness
// ============================================================

#[test]
fn given_any_outcome_when_run_then_exit_code_is_0_or_1() {
    let cases = [
        run_captured(&["claude-ask"], &FixedClient { response: "x" }),
        run_captured(&["claude-ask", "hi"], &FixedClient { response: "x" }),
        run_captured(&["claude-ask", "hi"], &FailingClient { message: "boom" }),
        run_captured(&["claude-ask", "--no-such-flag"], &FixedClient { response: "x" }),
        run_captured(&["claude-ask", "--help"], &FixedClient { response: "x" }),
        run_captured(&["claude-ask", "--version"], &FixedClient { response: "x" }),
    ];

    for (code, _, _) in cases {
        assert!(code == 0 || code == 1, "unexpected exit code {code}");
    }
}

#[test]
fn given_help_flag_when_run_then_usage_on_stdout_and_exit_0() {
    let (code, out, err) = run_captured(&["claude-ask", "--help"], &FixedClient { response: "x" });

    assert_eq!(code, 0);
    assert!(out.contains("Usage"));
    assert_eq!(err, "");
}

#[test]
fn given_unknown_flag_when_run_then_clap_error_on_stderr_and_exit_1() {
    let (code, out, err) =
        run_captured(&["claude-ask", "--bogus", "hi"], &FixedClient { response: "x" });

    assert_eq!(code, 1);
    assert_eq!(out, "");
    assert!(err.contains("--bogus"));
}
