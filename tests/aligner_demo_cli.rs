use std::path::{Path, PathBuf};
use std::process::{Command, Output};

const DEFAULT_WORDS: [&str; 15] = [
    "one", "zero", "zero", "zero", "one", "nine", "oh", "two", "one", "oh", "zero", "one",
    "eight", "zero", "three",
];

fn run_demo(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_aligner_demo"))
        .args(args)
        .env_remove("SPEECH_ALIGN_FORMAT")
        .env_remove("SPEECH_ALIGN_RESOURCE_DIR")
        .env_remove("RUST_LOG")
        .output()
        .expect("spawn aligner_demo")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("utf-8 stdout")
}

struct Fixture {
    dir: PathBuf,
}

impl Fixture {
    fn new(name: &str) -> Self {
        let dir = std::env::temp_dir().join(format!("speech_align_rs_cli_{name}"));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).expect("create fixture dir");
        Self { dir }
    }

    fn clip(&self, hypothesis: &[(&str, u64, u64)]) -> PathBuf {
        let path = self.dir.join("clip.wav");
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate: 16_000,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut writer = hound::WavWriter::create(&path, spec).expect("create wav");
        for _ in 0..16_000 {
            writer.write_sample(0i16).expect("write sample");
        }
        writer.finalize().expect("finalize wav");

        let words: Vec<serde_json::Value> = hypothesis
            .iter()
            .map(|(spelling, start, end)| {
                serde_json::json!({
                    "spelling": spelling,
                    "time_frame": {"start_ms": start, "end_ms": end},
                })
            })
            .collect();
        std::fs::write(
            self.dir.join("clip.words.json"),
            serde_json::to_string_pretty(&words).expect("serialize hypothesis"),
        )
        .expect("write hypothesis");
        path
    }

    fn file(&self, name: &str, contents: &[u8]) -> PathBuf {
        let path = self.dir.join(name);
        std::fs::write(&path, contents).expect("write fixture file");
        path
    }
}

impl Drop for Fixture {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.dir);
    }
}

fn path_str(path: &Path) -> &str {
    path.to_str().expect("utf-8 path")
}

#[test]
fn default_run_matches_every_sample_word() {
    let output = run_demo(&[]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let stdout = stdout_of(&output);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), DEFAULT_WORDS.len());
    assert_eq!(lines[0], "  one                       [350:630]");
    for (line, word) in lines.iter().zip(DEFAULT_WORDS) {
        assert!(line.starts_with("  "));
        assert_eq!(line[2..].split_whitespace().next(), Some(word));
    }
}

#[test]
fn single_argument_falls_back_to_bundled_sample() {
    let output = run_demo(&["/nonexistent/audio.wav"]);
    assert!(output.status.success());
    assert_eq!(stdout_of(&output).lines().count(), DEFAULT_WORDS.len());
}

#[test]
fn custom_recording_reports_insertions_and_deletions() {
    let fixture = Fixture::new("mixed");
    let audio = fixture.clip(&[
        ("uh", 0, 120),
        ("one", 150, 400),
        ("two", 420, 700),
        ("four", 720, 1000),
        ("five", 1020, 1300),
    ]);
    let transcript = fixture.file("clip.txt", b"one two three four\n");

    let output = run_demo(&[path_str(&audio), path_str(&transcript)]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(
        stdout_of(&output),
        concat!(
            "+ uh                        [0:120]\n",
            "  one                       [150:400]\n",
            "  two                       [420:700]\n",
            "- three\n",
            "  four                      [720:1000]\n",
            "+ five                      [1020:1300]\n",
        )
    );
}

#[test]
fn json_format_emits_summary() {
    let fixture = Fixture::new("json");
    let audio = fixture.clip(&[("a", 0, 100), ("x", 100, 200)]);
    let transcript = fixture.file("clip.txt", b"a b");

    let output = run_demo(&[path_str(&audio), path_str(&transcript), "--format", "json"]);
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json output");
    assert_eq!(value["summary"]["matched"], 1);
    assert_eq!(value["summary"]["deleted"], 1);
    assert_eq!(value["summary"]["inserted"], 1);
}

#[test]
fn missing_transcript_file_fails() {
    let fixture = Fixture::new("missing_transcript");
    let audio = fixture.clip(&[("a", 0, 100)]);
    let output = run_demo(&[path_str(&audio), "/nonexistent/transcript.txt"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("reading transcript"));
}

#[test]
fn invalid_utf8_transcript_fails() {
    let fixture = Fixture::new("bad_utf8");
    let audio = fixture.clip(&[("a", 0, 100)]);
    let transcript = fixture.file("clip.txt", &[0x61, 0x20, 0xc3, 0x28]);
    let output = run_demo(&[path_str(&audio), path_str(&transcript)]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("not valid UTF-8"));
}

#[test]
fn missing_acoustic_model_fails() {
    let fixture = Fixture::new("bad_model");
    let audio = fixture.clip(&[("a", 0, 100)]);
    let transcript = fixture.file("clip.txt", b"a");
    let output = run_demo(&[
        path_str(&audio),
        path_str(&transcript),
        "/nonexistent/acoustic-model",
    ]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to load model"));
}
