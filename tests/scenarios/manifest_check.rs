//! Loading a manifest from disk and checking it with a project config.

use std::fs;

use pcdm_works::application::ProblemKind;
use pcdm_works::infrastructure::Manifest;
use pcdm_works::presentation::create_check_use_case;
use pcdm_works::Config;
use tempfile::tempdir;

const MANIFEST: &str = r#"
[[entity]]
name = "letters"
kind = "collection"

[[entity]]
name = "letter"
kind = "generic_work"

[[entity]]
name = "scan"
kind = "generic_file"

[[entity.file]]
name = "scan.jp2"
uses = ["http://pcdm.org/use#ServiceFile", "urn:local:access-copy"]

[[member]]
parent = "letters"
child = "letter"

[[member]]
parent = "letter"
child = "scan"

[[member]]
parent = "letters"
child = "scan"
relation = "generic_work_to_collection"
"#;

#[test]
fn project_config_extends_the_vocabulary() {
    let dir = tempdir().unwrap();
    let manifest_path = dir.path().join("letters.toml");
    fs::write(&manifest_path, MANIFEST).unwrap();

    let manifest = Manifest::load(&manifest_path).unwrap();
    let result = create_check_use_case(Config::default())
        .execute(manifest.clone())
        .unwrap();
    let kinds: Vec<ProblemKind> = result.problems.iter().map(|p| p.kind).collect();
    assert_eq!(kinds, vec![ProblemKind::InvalidKind, ProblemKind::InvalidUse]);
    assert_eq!(
        result.problems[0].message,
        "generic_work must be a hydra-works generic work"
    );
    assert_eq!(result.problems[1].message, "invalid PCDM use: urn:local:access-copy");

    fs::write(
        dir.path().join("pcdm-works.toml"),
        "[uses]\nallowed = [\"urn:local:access-copy\"]\n",
    )
    .unwrap();
    let config = Config::load_or_default(Some(dir.path())).unwrap();
    let result = create_check_use_case(config).execute(manifest).unwrap();
    assert_eq!(result.problems.len(), 1);
    assert_eq!(result.memberships_applied, 2);
}
