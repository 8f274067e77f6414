use codspeed_criterion_compat::{criterion_group, criterion_main, Criterion};
use sparql_assist::{format, validate};

fn assist_format(c: &mut Criterion) {
    let query = generate_query(200);
    c.bench_function("format", |b| b.iter(|| format(&query)));
}

fn assist_validate(c: &mut Criterion) {
    let query = generate_query(200);
    c.bench_function("validate", |b| b.iter(|| validate(&query)));
}

criterion_group!(assist, assist_format, assist_validate);
criterion_main!(assist);

fn generate_query(patterns: usize) -> String {
    let mut query = String::from("PREFIX ex: <http://example.com/> SELECT * WHERE {");
    for i in 0..patterns {
        query.push_str(&format!(
            " OPTIONAL {{ ?s ex:p{i} ?o{i} FILTER(?o{i} > {i}) }}"
        ));
    }
    query.push_str(" } ORDER BY ?s LIMIT 10");
    query
}
