#[cfg(test)]
pub mod test_helpers {
    use std::collections::HashMap;

    use crate::host::{Fade, HostPage, SurfaceId, TriggerId};
    use crate::settings::LoadMode;
    use crate::tooltip::{DocRect, Placement, Size, Viewport};

    /// One scripted trigger on the fake page
    pub struct FakeTrigger {
        pub id: TriggerId,
        pub tip_text: String,
        pub text_content: String,
        pub rect: DocRect,
    }

    /// Recorded state of one surface the fake host created
    #[derive(Debug, Clone)]
    pub struct FakeSurface {
        pub trigger: TriggerId,
        pub text: String,
        pub mounted: bool,
        pub discarded: bool,
        pub fade: Fade,
        pub placement: Option<Placement>,
    }

    /// Scripted host page: fixed geometry in, recorded mutations out
    pub struct FakeHost {
        pub triggers: Vec<FakeTrigger>,
        pub viewport: Viewport,
        pub surface_size: Size,
        pub surfaces: HashMap<SurfaceId, FakeSurface>,
        pub font_families: Vec<(TriggerId, String, LoadMode)>,
        pub style_rules: Vec<String>,
        pub style_clears: usize,
        pub notifications: Vec<String>,
        next_surface: u64,
    }

    impl FakeHost {
        pub fn new() -> Self {
            Self {
                triggers: Vec::new(),
                viewport: Viewport {
                    width: 1000.0,
                    height: 800.0,
                    scroll_top: 0.0,
                    scroll_left: 0.0,
                },
                surface_size: Size {
                    width: 200.0,
                    height: 50.0,
                },
                surfaces: HashMap::new(),
                font_families: Vec::new(),
                style_rules: Vec::new(),
                style_clears: 0,
                notifications: Vec::new(),
                next_surface: 0,
            }
        }

        /// Add a trigger whose anchor sits comfortably mid-page
        pub fn add_trigger(&mut self, id: u64, text: &str) -> TriggerId {
            self.add_trigger_at(
                id,
                text,
                DocRect {
                    top: 400.0,
                    left: 100.0 + id as f64 * 50.0,
                    width: 20.0,
                    height: 20.0,
                },
            )
        }

        pub fn add_trigger_at(&mut self, id: u64, text: &str, rect: DocRect) -> TriggerId {
            let trigger = TriggerId(id);
            self.triggers.push(FakeTrigger {
                id: trigger,
                tip_text: format!("tip for {text}"),
                text_content: text.to_string(),
                rect,
            });
            trigger
        }

        pub fn surface_for(&self, trigger: TriggerId) -> Option<(&SurfaceId, &FakeSurface)> {
            self.surfaces
                .iter()
                .find(|(_, surface)| surface.trigger == trigger && !surface.discarded)
        }

        /// Whether the trigger's surface is currently in the document
        pub fn mounted(&self, trigger: TriggerId) -> bool {
            self.surface_for(trigger)
                .is_some_and(|(_, surface)| surface.mounted)
        }

        pub fn surface_count(&self) -> usize {
            self.surfaces.len()
        }

        fn surface_mut(&mut self, surface: SurfaceId) -> &mut FakeSurface {
            self.surfaces
                .get_mut(&surface)
                .expect("unknown surface id")
        }
    }

    impl HostPage for FakeHost {
        fn triggers(&self) -> Vec<TriggerId> {
            self.triggers.iter().map(|t| t.id).collect()
        }

        fn tip_text(&self, trigger: TriggerId) -> String {
            self.triggers
                .iter()
                .find(|t| t.id == trigger)
                .map(|t| t.tip_text.clone())
                .unwrap_or_default()
        }

        fn text_content(&self, trigger: TriggerId) -> String {
            self.triggers
                .iter()
                .find(|t| t.id == trigger)
                .map(|t| t.text_content.clone())
                .unwrap_or_default()
        }

        fn anchor_rect(&self, trigger: TriggerId) -> DocRect {
            self.triggers
                .iter()
                .find(|t| t.id == trigger)
                .map(|t| t.rect)
                .unwrap_or(DocRect {
                    top: 0.0,
                    left: 0.0,
                    width: 0.0,
                    height: 0.0,
                })
        }

        fn viewport(&self) -> Viewport {
            self.viewport
        }

        fn create_surface(&mut self, trigger: TriggerId, text: &str) -> SurfaceId {
            self.next_surface += 1;
            let id = SurfaceId(self.next_surface);
            self.surfaces.insert(
                id,
                FakeSurface {
                    trigger,
                    text: text.to_string(),
                    mounted: false,
                    discarded: false,
                    fade: Fade::None,
                    placement: None,
                },
            );
            id
        }

        fn surface_size(&self, _surface: SurfaceId) -> Size {
            self.surface_size
        }

        fn mount_surface(&mut self, surface: SurfaceId) {
            self.surface_mut(surface).mounted = true;
        }

        fn unmount_surface(&mut self, surface: SurfaceId) {
            self.surface_mut(surface).mounted = false;
        }

        fn discard_surface(&mut self, surface: SurfaceId) {
            let surface = self.surface_mut(surface);
            surface.mounted = false;
            surface.discarded = true;
        }

        fn apply_placement(&mut self, surface: SurfaceId, placement: &Placement) {
            self.surface_mut(surface).placement = Some(*placement);
        }

        fn set_fade(&mut self, surface: SurfaceId, fade: Fade) {
            self.surface_mut(surface).fade = fade;
        }

        fn set_font_family(&mut self, trigger: TriggerId, family: &str, mode: LoadMode) {
            self.font_families.push((trigger, family.to_string(), mode));
        }

        fn append_style_rule(&mut self, css: &str) {
            self.style_rules.push(css.to_string());
        }

        fn clear_style_rules(&mut self) {
            self.style_rules.clear();
            self.style_clears += 1;
        }

        fn notify(&mut self, text: &str) {
            self.notifications.push(text.to_string());
        }
    }
}
