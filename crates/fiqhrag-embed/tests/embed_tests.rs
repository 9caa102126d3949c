use fiqhrag_core::traits::Embedder;
use fiqhrag_embed::FakeEmbedder;

#[test]
fn fake_embedder_is_deterministic() {
    let embedder = FakeEmbedder::new(64);
    let a = embedder.embed("ما حكم الربا").unwrap();
    let b = embedder.embed("ما حكم الربا").unwrap();
    assert_eq!(a, b);
}

#[test]
fn fake_embedder_respects_dimension() {
    let embedder = FakeEmbedder::new(32);
    assert_eq!(embedder.dim(), 32);
    assert_eq!(embedder.embed("نص").unwrap().len(), 32);
}

#[test]
fn fake_embedder_output_is_unit_norm() {
    let embedder = FakeEmbedder::new(64);
    let v = embedder.embed("الزكاة واجبة على المسلم").unwrap();
    let norm = v.iter().map(|x| x * x).sum::<f32>().sqrt();
    assert!((norm - 1.0).abs() < 1e-4);
}

#[test]
fn different_texts_embed_differently() {
    let embedder = FakeEmbedder::new(64);
    let a = embedder.embed("الصلاة").unwrap();
    let b = embedder.embed("الزكاة").unwrap();
    assert_ne!(a, b);
}
