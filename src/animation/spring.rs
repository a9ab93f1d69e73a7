use crate::foundation::core::Fps;

/// Physical parameters of a damped spring.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SpringConfig {
    /// Damping coefficient (`c`).
    pub damping: f64,
    /// Spring stiffness (`k`).
    pub stiffness: f64,
    /// Mass (`m`).
    pub mass: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            damping: 10.0,
            stiffness: 100.0,
            mass: 1.0,
        }
    }
}

/// Spring value at a frame relative to the animation start.
///
/// `frame <= 0` returns `from`. The result depends only on the arguments.
pub fn spring(frame: f64, fps: Fps, cfg: SpringConfig, from: f64, to: f64) -> f64 {
    if frame <= 0.0 {
        return from;
    }
    let t = frame / fps.as_f64();
    from + (to - from) * spring_step(t, cfg.stiffness, cfg.damping, cfg.mass)
}

fn spring_step(t: f64, stiffness: f64, damping: f64, mass: f64) -> f64 {
    // Step response from 0 to 1 with x(0)=0, v(0)=0.
    let k = stiffness.max(0.0);
    let c = damping.max(0.0);
    let m = mass.max(1e-9);

    let w0 = (k / m).sqrt();
    if w0 == 0.0 {
        return t.min(1.0);
    }
    let zeta = c / (2.0 * (k * m).sqrt()).max(1e-9);

    if (zeta - 1.0).abs() < 1e-6 {
        let e = libm::exp(-w0 * t);
        1.0 - e * (1.0 + w0 * t)
    } else if zeta < 1.0 {
        let wd = w0 * (1.0 - zeta * zeta).sqrt();
        let e = libm::exp(-zeta * w0 * t);
        let k = zeta / (1.0 - zeta * zeta).sqrt();
        1.0 - e * (libm::cos(wd * t) + k * libm::sin(wd * t))
    } else {
        let z2 = (zeta * zeta - 1.0).sqrt();
        let r1 = -w0 * (zeta - z2);
        let r2 = -w0 * (zeta + z2);
        let c2 = (zeta + z2) / (2.0 * z2);
        let c1 = (zeta - z2) / (2.0 * z2);
        1.0 - (c2 * libm::exp(r1 * t) - c1 * libm::exp(r2 * t))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/spring.rs"]
mod tests;
