//! Moving averages against the reference series.
//!
//! Tolerance: 1e-6. Prices sit near 100, so this is well inside the
//! rounding noise of running sums and far below any algorithmic error.

mod fixtures;

use fixtures::reference_test;

reference_test!(
    sma_20,
    Sma,
    SmaConfig::new(20).unwrap(),
    |q: &RefQuote| q.close,
    "tests/fixtures/data/sma-20.csv",
    1e-6
);

reference_test!(
    ema_20,
    Ema,
    EmaConfig::new(20).unwrap(),
    |q: &RefQuote| q.close,
    "tests/fixtures/data/ema-20.csv",
    1e-6
);

reference_test!(
    rma_14,
    Rma,
    RmaConfig::new(14).unwrap(),
    |q: &RefQuote| q.close,
    "tests/fixtures/data/rma-14.csv",
    1e-6
);

reference_test!(
    wma_15,
    Wma,
    WmaConfig::new(15).unwrap(),
    |q: &RefQuote| q.close,
    "tests/fixtures/data/wma-15.csv",
    1e-6
);

reference_test!(
    dema_20,
    Dema,
    DemaConfig::new(20).unwrap(),
    |q: &RefQuote| q.close,
    "tests/fixtures/data/dema-20.csv",
    1e-6
);

reference_test!(
    tema_20,
    Tema,
    TemaConfig::new(20).unwrap(),
    |q: &RefQuote| q.close,
    "tests/fixtures/data/tema-20.csv",
    1e-6
);

reference_test!(
    hma_16,
    Hma,
    HmaConfig::new(16).unwrap(),
    |q: &RefQuote| q.close,
    "tests/fixtures/data/hma-16.csv",
    1e-6
);

reference_test!(
    alma_20,
    Alma,
    AlmaConfig::new(20, 0.85, 6.0).unwrap(),
    |q: &RefQuote| q.close,
    "tests/fixtures/data/alma-20.csv",
    1e-6
);

reference_test!(
    smma_20,
    Smma,
    SmmaConfig::new(20).unwrap(),
    |q: &RefQuote| q.close,
    "tests/fixtures/data/smma-20.csv",
    1e-6
);

reference_test!(
    swma,
    Swma,
    SwmaConfig,
    |q: &RefQuote| q.close,
    "tests/fixtures/data/swma.csv",
    1e-6
);

reference_test!(
    kama_10,
    Kama,
    KamaConfig::new(10).unwrap(),
    |q: &RefQuote| q.close,
    "tests/fixtures/data/kama-10.csv",
    1e-6
);

reference_test!(
    vwma_20,
    Vwma,
    VwmaConfig::new(20).unwrap(),
    RefQuote::close_with_volume,
    "tests/fixtures/data/vwma-20.csv",
    1e-6
);

reference_test!(
    linreg_9,
    LinReg,
    LinRegConfig::new(9).unwrap(),
    |q: &RefQuote| q.close,
    "tests/fixtures/data/linreg-9.csv",
    1e-6
);
