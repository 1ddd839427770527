use smallvec::SmallVec;

/// Chart transition length after every recompute.
pub const CHART_ANIMATION_SEC: f32 = 0.2;

type Values = SmallVec<[f64; 5]>;

/// Eases displayed chart values from their current state to the latest
/// profile. The target itself is never modified; only the drawn values move.
#[derive(Clone, Debug)]
pub struct ProfileTween {
    from: Values,
    to: Values,
    current: Values,
    elapsed: f32,
    duration: f32,
}

impl ProfileTween {
    /// Starts settled at `initial`.
    pub fn new(initial: &[f64], duration: f32) -> Self {
        let v: Values = initial.iter().copied().collect();
        Self {
            from: v.clone(),
            to: v.clone(),
            current: v,
            elapsed: duration,
            duration,
        }
    }

    /// Aim at new values, starting from whatever is currently displayed.
    /// A change in length, or a zero duration, snaps straight to the target.
    pub fn retarget(&mut self, target: &[f64]) {
        if target.len() != self.current.len() || self.duration <= 0.0 {
            self.current = target.iter().copied().collect();
            self.from = self.current.clone();
            self.to = self.current.clone();
            self.elapsed = self.duration;
            return;
        }
        self.from = self.current.clone();
        self.to = target.iter().copied().collect();
        self.elapsed = 0.0;
    }

    /// Advance by `dt_sec`; returns true while still moving.
    pub fn advance(&mut self, dt_sec: f32) -> bool {
        if self.is_settled() {
            return false;
        }
        self.elapsed = (self.elapsed + dt_sec.max(0.0)).min(self.duration);
        if self.is_settled() {
            self.current = self.to.clone();
            return false;
        }
        let k = ease_out_cubic(self.elapsed / self.duration) as f64;
        for ((c, a), b) in self.current.iter_mut().zip(&self.from).zip(&self.to) {
            *c = a + (b - a) * k;
        }
        true
    }

    #[inline]
    pub fn is_settled(&self) -> bool {
        self.duration <= 0.0 || self.elapsed >= self.duration
    }

    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.current
    }

    #[inline]
    pub fn target(&self) -> &[f64] {
        &self.to
    }
}

#[inline]
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}
