use crate::config::CacheConfig;
use regex::Regex;
use std::error::Error;
use std::fs;
use std::path::PathBuf;

/// Fixture traces live at the workspace root so both the tests and the
/// benches can reach them
pub const TRACES_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../traces");
pub const EXPECTED_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../traces/expected");

/// One discovered fixture: a trace file, the configuration to replay it
/// under, and the expected statistics as JSON
pub struct TestCase {
    pub trace: PathBuf,
    pub config: CacheConfig,
    pub expected: PathBuf,
}

/// Discovers the fixture cases by scanning the expected-output directory
///
/// Expected files are named `<trace>-s<s>-E<E>-b<b>.json`; the trace name
/// resolves to `traces/<trace>.trace` and the three numbers are the cache
/// configuration the expectation was computed for
///
/// returns: Result<Vec<TestCase>, Box<dyn Error>>
pub fn get_cases() -> Result<Vec<TestCase>, Box<dyn Error>> {
    let mut out = Vec::new();
    let expected_pattern =
        Regex::new(r"^(?P<trace>[0-9a-zA-Z_]+)-s(?P<s>[0-9]+)-E(?P<e>[0-9]+)-b(?P<b>[0-9]+)\.json$")?;
    let mut files = fs::read_dir(EXPECTED_PATH)?
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .filter(|entry| {
            entry
                .file_name()
                .to_str()
                .is_some_and(|name| expected_pattern.is_match(name))
        })
        .collect::<Vec<_>>();
    files.sort_by_key(|entry| entry.file_name());
    for file in files {
        let file_name = file
            .file_name()
            .into_string()
            .map_err(|e| format!("Can't convert OS string ({e:?}) to standard string"))?;
        let tokens = expected_pattern
            .captures(&file_name)
            .ok_or("Couldn't parse the expected file name".to_string())?;
        let trace_name = &tokens["trace"];
        let config = CacheConfig::new(
            tokens["s"].parse()?,
            tokens["e"].parse()?,
            tokens["b"].parse()?,
        )?;
        out.push(TestCase {
            trace: PathBuf::from(format!("{TRACES_PATH}/{trace_name}.trace")),
            config,
            expected: file.path(),
        })
    }
    Ok(out)
}
