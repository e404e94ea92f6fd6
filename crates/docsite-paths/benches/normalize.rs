//! Benchmarks for route path normalization and alias resolution.

use criterion::{Criterion, criterion_group, criterion_main};
use docsite_paths::{AliasRule, AliasTable, normalize_path, suggested_paths};
use std::hint::black_box;

const PATHS: &[&str] = &[
    "/README.md",
    "/01_Java/01_Java 语法和工具使用/集合.md",
    "/01_Java/03_多线程(异步并发)/线程池.md",
    "/01_Java/04_JVM&JDK/垃圾回收.md",
    "/07_人工智能/02_DeepSeek RAG 增强检索知识库系统/部署.md",
];

fn bench_normalize(c: &mut Criterion) {
    c.bench_function("normalize_path", |b| {
        b.iter(|| {
            for path in PATHS {
                black_box(normalize_path(black_box(path)));
            }
        });
    });

    c.bench_function("suggested_paths", |b| {
        b.iter(|| {
            for path in PATHS {
                black_box(suggested_paths(black_box(Some(path))));
            }
        });
    });
}

fn bench_alias(c: &mut Criterion) {
    let table = AliasTable::new(vec![
        AliasRule::new(
            "/01_Java/01_Java语法和工具使用/(.*)",
            "/01_Java/01_Java%20语法和工具使用/$1",
        ),
        AliasRule::new("/01_Java/03_多线程异步并发/(.*)", "/01_Java/03_多线程(异步并发)/$1"),
        AliasRule::new("/01_Java/04_JVMJDK/(.*)", "/01_Java/04_JVM&JDK/$1"),
        AliasRule::new(
            "/02_数据库/02_ElasticSearch/(.*)",
            "/02_数据库/02_Elastic%20Search/$1",
        ),
    ])
    .unwrap();

    c.bench_function("alias_resolve_hit", |b| {
        b.iter(|| black_box(table.resolve(black_box("/01_Java/04_JVMJDK/垃圾回收.md"))));
    });

    c.bench_function("alias_resolve_miss", |b| {
        b.iter(|| black_box(table.resolve(black_box("/05_运维/nginx.md"))));
    });
}

criterion_group!(benches, bench_normalize, bench_alias);
criterion_main!(benches);
