// Criterion benchmarks for Research Match

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use research_match::core::{jaccard, rank_candidates, TagSet};
use research_match::models::UserProfile;

const VOCAB: [&str; 12] = [
    "Machine Learning", "NLP", "Computer Vision", "Graphs", "Databases", "Compilers",
    "Cryptography", "Robotics", "HCI", "Bioinformatics", "Optimization", "Statistics",
];

fn create_candidate(id: usize) -> UserProfile {
    UserProfile {
        id: id.to_string(),
        full_name: format!("Researcher {}", id),
        interest_tags: (0..4).map(|k| VOCAB[(id * 5 + k * 7) % VOCAB.len()].to_string()).collect(),
        institution: None,
        department: None,
    }
}

fn create_requester() -> UserProfile {
    UserProfile {
        id: "current_user".to_string(),
        full_name: "Current User".to_string(),
        interest_tags: vec!["machine learning".into(), "nlp".into(), "graphs".into()],
        institution: None,
        department: None,
    }
}

fn bench_tag_normalization(c: &mut Criterion) {
    let tags: Vec<String> = VOCAB.iter().map(|t| t.to_string()).collect();

    c.bench_function("tag_set_from_tags", |b| {
        b.iter(|| TagSet::from_tags(black_box(&tags)));
    });
}

fn bench_jaccard(c: &mut Criterion) {
    let a = TagSet::from_tags(&VOCAB[..6]);
    let b = TagSet::from_tags(&VOCAB[3..]);

    c.bench_function("jaccard", |bench| {
        bench.iter(|| jaccard(black_box(&a), black_box(&b)));
    });
}

fn bench_ranking(c: &mut Criterion) {
    let requester = create_requester();

    let mut group = c.benchmark_group("ranking");

    for candidate_count in [10, 100, 1000, 10000].iter() {
        let candidates: Vec<UserProfile> = (0..*candidate_count).map(create_candidate).collect();

        group.bench_with_input(
            BenchmarkId::new("rank_candidates", candidate_count),
            candidate_count,
            |b, _| {
                b.iter(|| {
                    rank_candidates(
                        black_box("current_user"),
                        black_box(&requester),
                        black_box(&candidates),
                        black_box(5),
                    )
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_tag_normalization, bench_jaccard, bench_ranking);

criterion_main!(benches);
