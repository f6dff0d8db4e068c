use article_features::features::{AnnotatedToken, EntityAggregator, Ner};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn article(nb_sentences: usize) -> Vec<AnnotatedToken> {
    (0..nb_sentences)
        .flat_map(|i| {
            let org = format!("Org {}", i % 7);
            let character = format!("Character {}", i % 11);
            vec![
                AnnotatedToken::new("The", Ner::None),
                AnnotatedToken::new("Org", Ner::Organization).with_entity_name(&org),
                AnnotatedToken::new("Inc", Ner::Organization).with_entity_name(&org),
                AnnotatedToken::new("in", Ner::None),
                AnnotatedToken::new("Paris", Ner::Location).with_entity_name("Paris"),
                AnnotatedToken::new("told", Ner::None).with_attribution_name(&character),
                AnnotatedToken::new("him", Ner::None).with_character_name(&character),
                AnnotatedToken::new(".", Ner::None),
            ]
        })
        .collect()
}

pub fn aggregate(c: &mut Criterion) {
    let tokens = article(1_000);
    let aggregator = EntityAggregator::default();
    c.bench_function("aggregate_8k_tokens", |b| {
        b.iter(|| aggregator.aggregate(black_box(&tokens)))
    });
}

criterion_group!(benches, aggregate);
criterion_main!(benches);
