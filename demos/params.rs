//! Fill a query template with typed parameters.
//!
//! Run with `RUST_LOG=sparql_literal=trace cargo run --example params` to see
//! which values went through the fallback branch.

use chrono::{TimeZone, Utc};
use sparql_literal::{value, Identifier, Iri, Literal, Param, PrefixedName};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .compact()
        .init();

    let template = "SELECT ?s WHERE {\n  \
                    ?s a @type ;\n     \
                    foaf:name $2 ;\n     \
                    foaf:homepage @home ;\n     \
                    ex:score @score ;\n     \
                    ex:seen @seen ;\n     \
                    rdfs:label @label ;\n     \
                    ex:meta @meta .\n}";

    let params = vec![
        Param::named("type", 1, PrefixedName::new("foaf:Person")),
        Param::new(2, "Alice \"\"\"the quoted\"\"\""),
        Param::named("home", 3, Iri::new("http://alice.example/my page")),
        Param::named("score", 4, 97.5f64),
        Param::named("seen", 5, Utc.with_ymd_and_hms(2023, 1, 2, 3, 4, 5).unwrap()),
        Param::named(
            "label",
            6,
            Literal::lang("Alice", "en").with_datatype(Identifier::prefixed("xsd:string")),
        ),
        Param::named("meta", 7, value!({"source": "import", "rev": 3})),
    ];

    let query = params.iter().fold(template.to_string(), |query, param| {
        let token = param.serialize();
        param
            .placeholders()
            .iter()
            .fold(query, |q, placeholder| q.replace(placeholder.as_str(), &token))
    });

    println!("{}", query);
}
