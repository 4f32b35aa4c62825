#![no_main]
use libfuzzer_sys::fuzz_target;
use rhuff::compute;

fuzz_target!(|data: (u32, Vec<u16>)| {
    let (base, weights) = data;
    let base = 2 + (base % 9); // 2 to 10

    if weights.is_empty() {
        return;
    }
    let total: u64 = weights.iter().map(|&w| u64::from(w)).sum();
    if total == 0 {
        return;
    }

    let probabilities: Vec<f64> = weights
        .iter()
        .map(|&w| f64::from(w) / total as f64)
        .collect();

    let analysis = match compute(base, &probabilities) {
        Ok(analysis) => analysis,
        Err(_) => return,
    };

    // Coverage and digit alphabet.
    for (symbol, code) in analysis.codebook.iter() {
        assert!(probabilities[symbol] > 0.0);
        assert!(!code.is_empty());
        assert!(code.bytes().all(|b| (b'0'..b'0' + base as u8).contains(&b)));
    }

    // Prefix property.
    let codes: Vec<&str> = analysis.codebook.iter().map(|(_, c)| c).collect();
    for (i, a) in codes.iter().enumerate() {
        for (j, b) in codes.iter().enumerate() {
            if i != j {
                assert!(!b.starts_with(a));
            }
        }
    }

    assert!(analysis.codebook.kraft_sum(base) <= 1.0 + 1e-9);
});
