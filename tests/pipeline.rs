//! End-to-end checks from transfer function to published fields.

use std::time::Duration;

use tf_plane::color::Rgba8;
use tf_plane::transfer_fn::eval_poly;
use tf_plane::{Complex, Error, PlotConfig, PlotFrame, PoleZeroPlot, TransferFunction};

const TIMEOUT: Duration = Duration::from_secs(30);

fn first_order() -> TransferFunction {
    TransferFunction::new(vec![1.0], vec![1.0, 1.0])
}

#[test]
fn first_order_lowpass() {
    let tf = first_order();
    assert_eq!(tf.eval(Complex::ZERO), Complex::ONE);
    assert_eq!(tf.eval_defined(Complex::new(-1.0, 0.0)), None);

    let frame = PlotFrame::compute(Some(&tf), 132, &PlotConfig::default()).unwrap();
    assert!(frame.zeros.is_empty());
    assert_eq!(frame.poles.len(), 1);
    assert!((frame.poles[0].re + 1.0).abs() < 1e-12);
    assert!(frame.poles[0].im.abs() < 1e-12);

    // 1/(1 + jw) lies on the circle |H - 1/2| = 1/2
    assert!(!frame.nyquist.is_empty());
    for p in &frame.nyquist {
        assert!(((*p - Complex::new(0.5, 0.0)).norm() - 0.5).abs() < 1e-9);
    }
}

#[test]
fn poles_are_roots_of_denominator() {
    // (s + 1)(s^2 + 2s + 5)
    let tf = TransferFunction::new(vec![2.0, 1.0], vec![5.0, 7.0, 3.0, 1.0]);
    let frame = PlotFrame::compute(Some(&tf), 200, &PlotConfig::default()).unwrap();
    assert_eq!(frame.zeros.len(), 1);
    assert_eq!(frame.poles.len(), 3);
    for p in &frame.poles {
        assert!(eval_poly(&tf.den, *p).norm() < 1e-9, "{:?}", p);
    }

    // every root lands inside the s-plane plot area
    let mapping = frame.input_mapping();
    for r in frame.zeros.iter().chain(&frame.poles) {
        let px = mapping.to_canvas(*r);
        assert!(px.re >= 32.0 && px.re <= 200.0, "{:?}", px);
        assert!(px.im >= 0.0 && px.im <= 168.0, "{:?}", px);
    }
}

#[test]
fn config_from_toml_drives_the_frame() {
    let config = PlotConfig::from_toml_str(
        r#"
        axis_margin = 8

        [nyquist]
        half_range = 10.0
        step = 0.5
        "#,
    )
    .unwrap();
    let frame = PlotFrame::compute(Some(&first_order()), 40, &config).unwrap();
    assert_eq!(frame.input_request.plot_dim(), 32);
    assert_eq!(frame.nyquist.len(), 40);
}

#[test]
fn invalid_config_is_rejected() {
    let mut config = PlotConfig::default();
    config.nyquist.step = 0.0;
    assert!(matches!(
        PoleZeroPlot::new(config),
        Err(Error::InvalidConfig { .. })
    ));
}

#[test]
fn plot_publishes_each_field_once() {
    let (mut plot, fields) = PoleZeroPlot::new(PlotConfig::default()).unwrap();
    let tf = first_order();
    plot.update(Some(&tf), 64).unwrap();
    plot.update(Some(&tf), 64).unwrap();

    let input = fields.input.recv_timeout(TIMEOUT).unwrap();
    let output = fields.output.recv_timeout(TIMEOUT).unwrap();
    assert_eq!(input.buffer.width(), 64);
    assert_eq!(output.buffer.height(), 64);
    assert_eq!(input.buffer.pixel(31, 10), Some(Rgba8::TRANSPARENT));
    assert!(input.buffer.pixel(32, 10).unwrap().is_opaque());

    // memoized update did not start a second render
    plot.cancel();
    assert!(fields.input.recv_timeout(Duration::from_millis(50)).is_err());
    assert!(fields.output.try_recv().is_err());
}

#[test]
fn latest_update_wins() {
    let (mut plot, fields) = PoleZeroPlot::new(PlotConfig::default()).unwrap();
    plot.update(Some(&first_order()), 256).unwrap();
    let second = TransferFunction::new(vec![1.0, 0.0, 1.0], vec![1.0, 2.0, 1.0]);
    plot.update(Some(&second), 256).unwrap();

    // wait for the current generation; anything from the first must precede it
    let mut last = fields.input.recv_timeout(TIMEOUT).unwrap();
    while last.generation < 2 {
        last = fields.input.recv_timeout(TIMEOUT).unwrap();
    }
    assert_eq!(last.generation, 2);
    plot.cancel();
    assert!(fields.input.try_recv().is_err());
}
