use crate::animation::ease::Ease;
use crate::foundation::error::{FramecastError, FramecastResult};

/// Behaviour of [`interpolate`] when the input leaves the input range on one side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Extrapolate {
    /// Hold the boundary output value.
    #[default]
    Clamp,
    /// Continue the linear mapping past the boundary.
    Extend,
}

/// Options for [`interpolate`] and [`interpolate_piecewise`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InterpolateOpts {
    /// Extrapolation below the first input stop.
    pub left: Extrapolate,
    /// Extrapolation above the last input stop.
    pub right: Extrapolate,
    /// Curve applied to the normalized fraction inside each span.
    pub easing: Ease,
}

impl InterpolateOpts {
    /// Clamp on both sides with the given easing.
    pub fn clamped(easing: Ease) -> Self {
        Self {
            left: Extrapolate::Clamp,
            right: Extrapolate::Clamp,
            easing,
        }
    }
}

/// Map `x` from `input` to `output`.
///
/// Easing is applied to the normalized fraction only while it lies in `[0, 1]`; extended
/// extrapolation continues linearly.
pub fn interpolate(x: f64, input: [f64; 2], output: [f64; 2], opts: InterpolateOpts) -> f64 {
    let [in0, in1] = input;
    let [out0, out1] = output;
    let span = in1 - in0;
    if span == 0.0 {
        return if x < in0 { out0 } else { out1 };
    }

    let t = (x - in0) / span;
    let t = if t < 0.0 {
        match opts.left {
            Extrapolate::Clamp => 0.0,
            Extrapolate::Extend => t,
        }
    } else if t > 1.0 {
        match opts.right {
            Extrapolate::Clamp => 1.0,
            Extrapolate::Extend => t,
        }
    } else {
        opts.easing.apply(t)
    };

    out0 + (out1 - out0) * t
}

/// Multi-stop variant of [`interpolate`].
///
/// `inputs` must be strictly increasing and match `outputs` in length (at least two stops).
pub fn interpolate_piecewise(
    x: f64,
    inputs: &[f64],
    outputs: &[f64],
    opts: InterpolateOpts,
) -> FramecastResult<f64> {
    if inputs.len() < 2 {
        return Err(FramecastError::animation(
            "interpolate needs at least two input stops",
        ));
    }
    if inputs.len() != outputs.len() {
        return Err(FramecastError::animation(format!(
            "interpolate input/output length mismatch ({} vs {})",
            inputs.len(),
            outputs.len()
        )));
    }
    if inputs
        .windows(2)
        .any(|w| w[0].partial_cmp(&w[1]) != Some(std::cmp::Ordering::Less))
    {
        return Err(FramecastError::animation(
            "interpolate input stops must be strictly increasing",
        ));
    }

    let last = inputs.len() - 1;
    // Pick the span containing x; out-of-range inputs use the outermost spans.
    let seg = inputs[1..last]
        .iter()
        .position(|&stop| x < stop)
        .unwrap_or(last - 1);

    let seg_opts = InterpolateOpts {
        left: if seg == 0 {
            opts.left
        } else {
            Extrapolate::Clamp
        },
        right: if seg == last - 1 {
            opts.right
        } else {
            Extrapolate::Clamp
        },
        easing: opts.easing,
    };
    Ok(interpolate(
        x,
        [inputs[seg], inputs[seg + 1]],
        [outputs[seg], outputs[seg + 1]],
        seg_opts,
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/animation/interpolate.rs"]
mod tests;
