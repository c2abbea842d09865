use grade_core::{
    load_classes, lookup_grades, sha256_hex, DataPaths, Error, FetchError, MemorySource,
    Sha256Digester,
};

const MANIFEST: &str = r#"{"classes":[{"name":"Algebra I","file":"algebra1.json"}]}"#;

fn ana_roster() -> String {
    format!(
        r#"{{"students":[{{"name":"Ana","passwordHash":"{}","grades":{{"quiz1":9,"quiz2":8}}}}]}}"#,
        sha256_hex("secret")
    )
}

fn portal() -> MemorySource {
    MemorySource::new()
        .with_document("data/classes.json", MANIFEST)
        .with_document("data/algebra1.json", &ana_roster())
}

#[tokio::test]
async fn manifest_populates_one_option() {
    let manifest = load_classes(&portal(), &DataPaths::default()).await.unwrap();
    assert_eq!(manifest.classes.len(), 1);
    assert_eq!(manifest.classes[0].name, "Algebra I");
    assert_eq!(manifest.classes[0].file, "algebra1.json");
}

#[tokio::test]
async fn manifest_404_reports_reason() {
    let source = MemorySource::new().with_failure("data/classes.json", FetchError::Status(404));
    let err = load_classes(&source, &DataPaths::default()).await.unwrap_err();
    assert!(matches!(err, Error::ManifestLoad(_)));
    assert!(err.to_string().contains("404"));
}

#[tokio::test]
async fn correct_password_shows_grades_in_order() {
    let report = lookup_grades(
        &portal(),
        &Sha256Digester,
        &DataPaths::default(),
        "algebra1.json",
        "secret",
    )
    .await
    .unwrap();

    assert_eq!(report.heading(), "Notas de Ana");
    let items: Vec<String> = report.lines.iter().map(ToString::to_string).collect();
    assert_eq!(items, vec!["quiz1: 9", "quiz2: 8"]);
}

#[tokio::test]
async fn wrong_password_is_ambiguous() {
    let err = lookup_grades(
        &portal(),
        &Sha256Digester,
        &DataPaths::default(),
        "algebra1.json",
        "wrong",
    )
    .await
    .unwrap_err();

    assert_eq!(err, Error::NoMatch);
    assert_eq!(
        err.to_string(),
        "Contraseña incorrecta o estudiante no encontrado."
    );
}

#[tokio::test]
async fn no_match_message_is_identical_for_any_class() {
    let source = portal().with_document("data/empty.json", r#"{"students":[]}"#);
    let mut messages = Vec::new();
    for (class, password) in [
        ("algebra1.json", "wrong"),
        ("algebra1.json", "secre"),
        ("empty.json", "secret"),
    ] {
        let err = lookup_grades(&source, &Sha256Digester, &DataPaths::default(), class, password)
            .await
            .unwrap_err();
        messages.push(err.to_string());
    }
    assert!(messages.windows(2).all(|pair| pair[0] == pair[1]));
}

#[tokio::test]
async fn missing_inputs_issue_no_roster_request() {
    let source = portal();
    for (class, password) in [("", "secret"), ("algebra1.json", ""), ("", "")] {
        let err = lookup_grades(&source, &Sha256Digester, &DataPaths::default(), class, password)
            .await
            .unwrap_err();
        assert_eq!(err, Error::Validation);
    }
    assert!(source.requests().is_empty());
}

#[tokio::test]
async fn missing_roster_is_a_roster_error() {
    let err = lookup_grades(
        &portal(),
        &Sha256Digester,
        &DataPaths::default(),
        "history.json",
        "secret",
    )
    .await
    .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Error al cargar los datos de la clase: No se pudo cargar el archivo de la clase (HTTP 404)"
    );
}

#[tokio::test]
async fn repeated_submissions_refetch_the_roster() {
    let source = portal();
    for _ in 0..2 {
        lookup_grades(
            &source,
            &Sha256Digester,
            &DataPaths::default(),
            "algebra1.json",
            "secret",
        )
        .await
        .unwrap();
    }
    assert_eq!(
        source.requests(),
        vec!["data/algebra1.json".to_string(), "data/algebra1.json".to_string()]
    );
}
