use gradebook::cli::actions::{check, classes, lookup};
use gradebook::source::{DataSource, DirectorySource};
use grade_core::sha256_hex;
use secrecy::SecretString;
use std::fs;
use tempfile::TempDir;

fn publish() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("classes.json"),
        r#"{"classes":[
            {"name":"Algebra I","file":"algebra1.json"},
            {"name":"Historia","file":"2024/historia.json"}
        ]}"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("algebra1.json"),
        format!(
            r#"{{"students":[{{"name":"Ana","passwordHash":"{}","grades":{{"quiz1":9,"quiz2":8}}}}]}}"#,
            sha256_hex("secret")
        ),
    )
    .unwrap();
    fs::create_dir(dir.path().join("2024")).unwrap();
    fs::write(
        dir.path().join("2024/historia.json"),
        format!(
            r#"{{"students":[{{"name":"Luis","passwordHash":"{}","grades":{{"ensayo":"Notable","examen":6.5}}}}]}}"#,
            sha256_hex("hunter2")
        ),
    )
    .unwrap();
    dir
}

#[tokio::test]
async fn classes_come_back_in_manifest_order() {
    let dir = publish();
    let entries = classes::list(&DirectorySource::new(dir.path())).await.unwrap();
    let listed: Vec<(&str, &str)> = entries
        .iter()
        .map(|entry| (entry.name.as_str(), entry.file.as_str()))
        .collect();
    assert_eq!(
        listed,
        vec![("Algebra I", "algebra1.json"), ("Historia", "2024/historia.json")]
    );
}

#[tokio::test]
async fn lookup_reads_nested_roster() {
    let dir = publish();
    let source = DataSource::parse(dir.path().to_str().unwrap()).unwrap();
    let report = lookup::report(
        &source,
        "2024/historia.json",
        &SecretString::from("hunter2".to_string()),
    )
    .await
    .unwrap();

    assert_eq!(report.heading(), "Notas de Luis");
    let items: Vec<String> = report.lines.iter().map(ToString::to_string).collect();
    assert_eq!(items, vec!["ensayo: Notable", "examen: 6.5"]);
}

#[tokio::test]
async fn lookup_wrong_password_uses_ambiguous_message() {
    let dir = publish();
    let err = lookup::report(
        &DirectorySource::new(dir.path()),
        "algebra1.json",
        &SecretString::from("wrong".to_string()),
    )
    .await
    .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Contraseña incorrecta o estudiante no encontrado."
    );
}

#[tokio::test]
async fn lookup_empty_password_reports_validation_message() {
    let dir = publish();
    let password = gradebook::cli::actions::read_password(std::io::Cursor::new("\n")).unwrap();
    let err = lookup::report(&DirectorySource::new(dir.path()), "algebra1.json", &password)
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Debes seleccionar una clase e introducir tu contraseña."
    );
}

#[tokio::test]
async fn lookup_refuses_to_leave_data_directory() {
    let dir = publish();
    let err = lookup::report(
        &DirectorySource::new(dir.path().join("2024")),
        "../algebra1.json",
        &SecretString::from("secret".to_string()),
    )
    .await
    .unwrap_err();
    assert!(err.to_string().starts_with("Error al cargar los datos de la clase"));
}

#[tokio::test]
async fn missing_manifest_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let err = classes::list(&DirectorySource::new(dir.path())).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "Error al cargar las clases: No se pudo cargar el listado de clases (HTTP 404)"
    );
}

#[tokio::test]
async fn published_sample_data_passes_audit() {
    let sample = concat!(env!("CARGO_MANIFEST_DIR"), "/apps/web/data");
    let audits = check::audit(&DirectorySource::new(sample)).await.unwrap();
    assert_eq!(audits.len(), 1);
    assert_eq!(audits[0].students, 2);
    assert!(audits[0].problems.is_empty(), "{:?}", audits[0].problems);
}
