//! Gradient-orb drift used behind the song overlay.

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OrbPosition {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OrbLayout {
    pub orbs: [OrbPosition; 3],
}

/// Per-axis wave: `amplitude * sin(time * frequency + phase)`.
#[derive(Debug, Clone, Copy)]
struct Wave {
    amplitude: f64,
    frequency: f64,
    phase: f64,
}

impl Wave {
    const fn new(amplitude: f64, frequency: f64, phase: f64) -> Self {
        Self {
            amplitude,
            frequency,
            phase,
        }
    }

    fn sample(self, t: f64) -> f64 {
        self.amplitude * (t * self.frequency + self.phase).sin()
    }
}

// (x, y) waves for each orb; frequencies are in radians per second.
const ORB_WAVES: [(Wave, Wave); 3] = [
    (Wave::new(18.0, 0.31, 0.0), Wave::new(14.0, 0.23, 1.1)),
    (Wave::new(16.0, 0.19, 2.4), Wave::new(20.0, 0.27, 0.6)),
    (Wave::new(22.0, 0.13, 4.2), Wave::new(12.0, 0.37, 3.3)),
];

/// Orb offsets, in percent of the overlay size, `elapsed_secs` after open.
pub fn orb_layout(elapsed_secs: f64) -> OrbLayout {
    let t = if elapsed_secs.is_finite() {
        elapsed_secs.max(0.0)
    } else {
        0.0
    };
    let mut layout = OrbLayout::default();
    for (orb, (wave_x, wave_y)) in layout.orbs.iter_mut().zip(ORB_WAVES) {
        orb.x = wave_x.sample(t);
        orb.y = wave_y.sample(t);
    }
    layout
}

impl OrbLayout {
    /// CSS custom properties consumed by the orb stylesheet.
    pub fn css_vars(&self) -> String {
        self.orbs
            .iter()
            .enumerate()
            .map(|(index, orb)| {
                let n = index + 1;
                format!("--orb{n}-x: {:.2}%; --orb{n}-y: {:.2}%;", orb.x, orb.y)
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_stays_within_amplitude() {
        for step in 0..600 {
            let layout = orb_layout(step as f64 * 0.25);
            for (orb, (wave_x, wave_y)) in layout.orbs.iter().zip(ORB_WAVES) {
                assert!(orb.x.abs() <= wave_x.amplitude + f64::EPSILON);
                assert!(orb.y.abs() <= wave_y.amplitude + f64::EPSILON);
            }
        }
    }

    #[test]
    fn orbs_move_independently() {
        let layout = orb_layout(5.0);
        assert_ne!(layout.orbs[0], layout.orbs[1]);
        assert_ne!(layout.orbs[1], layout.orbs[2]);
        assert_ne!(orb_layout(5.0), orb_layout(5.5));
    }

    #[test]
    fn bad_time_falls_back_to_origin_frame() {
        assert_eq!(orb_layout(f64::NAN), orb_layout(0.0));
        assert_eq!(orb_layout(-3.0), orb_layout(0.0));
    }

    #[test]
    fn css_vars_name_every_orb() {
        let vars = orb_layout(0.0).css_vars();
        for name in ["--orb1-x", "--orb1-y", "--orb2-x", "--orb2-y", "--orb3-x", "--orb3-y"] {
            assert!(vars.contains(name), "missing {name} in {vars}");
        }
        assert!(vars.starts_with("--orb1-x: 0.00%;"));
    }
}
