#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CursorGlow {
    x: f64,
    y: f64,
    visible: bool,
}

impl CursorGlow {
    pub fn pointer_moved(self, x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            visible: true,
        }
    }

    pub fn pointer_left(self) -> Self {
        Self {
            visible: false,
            ..self
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn style(&self) -> String {
        let opacity = if self.visible { 1 } else { 0 };
        format!("left: {}px; top: {}px; opacity: {opacity};", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden() {
        let glow = CursorGlow::default();

        assert!(!glow.is_visible());
        assert_eq!(glow.style(), "left: 0px; top: 0px; opacity: 0;");
    }

    #[test]
    fn follows_pointer_and_fades_on_leave() {
        let glow = CursorGlow::default().pointer_moved(120.0, 48.5);
        assert_eq!(glow.style(), "left: 120px; top: 48.5px; opacity: 1;");

        let left = glow.pointer_left();
        assert!(!left.is_visible());
        assert_eq!(left.style(), "left: 120px; top: 48.5px; opacity: 0;");
    }
}
