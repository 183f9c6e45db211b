use crate::icons::{IconCache, IconSource};
use batt_config::IndicatorConfig;
use batt_core::{BatteryState, Message, Orientation, Result, Size, Widget};
use batt_renderer::{compute_draw_plan, Appearance, DrawPlan, IconKind, Surface};
use tracing::debug;

/// The battery indicator component.
///
/// Holds configuration, current state and the icon cache.  Every draw
/// recomputes the full [`DrawPlan`] from scratch; nothing but decoded icons
/// survives between frames.
#[derive(Debug)]
pub struct BatteryIndicator {
    config:     IndicatorConfig,
    appearance: Appearance,
    state:      BatteryState,
    /// Last available box handed to `measure`.
    available:  Size,
    /// Resolved size; `None` until measured or after a size-affecting change.
    bounds:     Option<Size>,
    icons:      IconCache,
    dirty:      bool,
}

impl BatteryIndicator {
    pub fn new(config: IndicatorConfig) -> Self {
        let mut indicator = Self {
            appearance: Appearance::from_config(&config),
            state:      config.initial_state(),
            available:  Size::default(),
            bounds:     None,
            icons:      IconCache::new(),
            dirty:      true,
            config,
        };
        indicator.bind_icons();
        indicator
    }

    pub fn config(&self) -> &IndicatorConfig {
        &self.config
    }

    pub fn state(&self) -> BatteryState {
        self.state
    }

    /// `true` when something changed since the last [`draw`](Self::draw).
    pub fn needs_redraw(&self) -> bool {
        self.dirty
    }

    /// Replace the configuration.  The current state is kept; icons are only
    /// decoded again if their source changed.
    pub fn set_config(&mut self, config: IndicatorConfig) {
        if config == self.config {
            return;
        }
        if (config.size, config.scale, config.orientation)
            != (self.config.size, self.config.scale, self.config.orientation)
        {
            self.bounds = None;
        }
        self.appearance = Appearance::from_config(&config);
        self.config = config;
        self.bind_icons();
        self.dirty = true;
    }

    pub fn set_orientation(&mut self, orientation: Orientation) -> bool {
        if orientation == self.config.orientation {
            return false;
        }
        self.config.orientation = orientation;
        self.appearance.orientation = orientation;
        self.bounds = None;
        self.dirty = true;
        true
    }

    /// Set the charge level in percent.  Values outside `0..=100` are clamped.
    pub fn set_charge_level(&mut self, level: i32) -> bool {
        self.apply(BatteryState::new(level, self.state.is_charging))
    }

    pub fn set_charging(&mut self, is_charging: bool) -> bool {
        self.apply(BatteryState { is_charging, ..self.state })
    }

    /// Entry point for the battery-status collaborator: `charge_fraction` in
    /// `[0, 1]`.
    pub fn update_from_battery_status(&mut self, charge_fraction: f32, is_charging: bool) -> bool {
        self.apply(BatteryState::from_fraction(charge_fraction, is_charging))
    }

    /// Size at the configured `size` and display `scale`, ignoring any
    /// constraint.
    pub fn preferred_size(&self) -> Size {
        let unit = self.config.size as f32 * self.config.scale.max(0.0);
        let short = unit as u32;
        let long = (unit * 2.0) as u32;
        match self.config.orientation {
            Orientation::Portrait  => Size::new(short, long),
            Orientation::Landscape => Size::new(long, short),
        }
    }

    /// Resolve the widget's size: the 1:2 (or 2:1) box from
    /// [`preferred_size`](Self::preferred_size), shrunk uniformly when an axis
    /// of `available` is smaller.  A zero axis is unconstrained.
    pub fn measure(&mut self, available: Size) -> Size {
        let preferred = self.preferred_size();
        let fit = |limit: u32, want: u32| {
            if limit == 0 || want <= limit { 1.0 } else { limit as f32 / want as f32 }
        };
        let factor = fit(available.width, preferred.width).min(fit(available.height, preferred.height));
        let size = if factor < 1.0 {
            Size::new(
                (preferred.width as f32 * factor) as u32,
                (preferred.height as f32 * factor) as u32,
            )
        } else {
            preferred
        };

        if self.bounds != Some(size) {
            debug!(width = size.width, height = size.height, "measured");
            self.dirty = true;
        }
        self.available = available;
        self.bounds = Some(size);
        size
    }

    /// The plan for the current state, without drawing.
    pub fn plan(&self) -> DrawPlan {
        let bounds = self.bounds.unwrap_or_else(|| self.preferred_size());
        compute_draw_plan(&self.appearance, &self.state, bounds)
    }

    /// Paint the current state onto `surface` and return what was drawn.
    ///
    /// Measures against the last available box first if a configuration
    /// change invalidated the size.
    pub fn draw(&mut self, surface: &mut dyn Surface) -> Result<DrawPlan> {
        if self.bounds.is_none() {
            self.measure(self.available);
        }
        let plan = self.plan();

        if let Some(placed) = plan.icon() {
            self.icons.load(placed.icon);
        }
        let icons = &self.icons;
        plan.render(surface, |kind| icons.cached(kind))?;

        self.dirty = false;
        debug!(
            level = self.state.charge_level,
            charging = self.state.is_charging,
            bucket = ?plan.bucket,
            commands = plan.commands.len(),
            "drew battery"
        );
        Ok(plan)
    }

    fn apply(&mut self, state: BatteryState) -> bool {
        if state == self.state {
            return false;
        }
        self.state = state;
        self.dirty = true;
        true
    }

    fn bind_icons(&mut self) {
        self.icons.assign(
            IconKind::Charging,
            IconSource::resolve(IconKind::Charging, self.config.charging_icon.as_deref()),
        );
        self.icons.assign(
            IconKind::Warning,
            IconSource::resolve(IconKind::Warning, self.config.warning_icon.as_deref()),
        );
    }
}

impl Default for BatteryIndicator {
    fn default() -> Self {
        Self::new(IndicatorConfig::default())
    }
}

impl Widget for BatteryIndicator {
    fn id(&self) -> &str {
        "battery"
    }

    fn update(&mut self, message: Message) -> bool {
        match message {
            Message::BatteryStatus { fraction, charging } => {
                self.update_from_battery_status(fraction, charging)
            }
            Message::ChargeLevel(level) => self.set_charge_level(level),
            Message::Charging(charging) => self.set_charging(charging),
            Message::Orientation(orientation) => self.set_orientation(orientation),
        }
    }

    fn measure(&mut self, available: Size) -> Size {
        BatteryIndicator::measure(self, available)
    }
}
