//! Engine facade
//!
//! One explicitly-owned context holding everything the gadget needs: the
//! host boundary, the timer queue, the instance registry, the settings
//! record, the webfont injector and the injected collaborators. Created
//! once, torn down explicitly; no ambient module state anywhere.

use std::time::Instant;

use crate::catalog::FontInfo;
use crate::host::{DeviceClass, HostPage, PointerEvent, TriggerId};
use crate::messages::{Messages, MsgKey};
use crate::settings::{Settings, SettingsPresenter, SettingsStore};
use crate::timer::{TimerKind, TimerQueue};
use crate::tooltip::{
    PlacementConfig, Registry, Timings, TooltipInstance, dispatcher, tooltip_events,
};
use crate::webfont::WebfontInjector;

/// The tooltip engine for one host page
pub struct TipEngine<H: HostPage> {
    host: H,
    device: DeviceClass,
    timings: Timings,
    placement: PlacementConfig,
    timers: TimerQueue,
    registry: Registry,
    settings: Settings,
    store: Box<dyn SettingsStore>,
    presenter: Box<dyn SettingsPresenter>,
    webfont: WebfontInjector,
    messages: Messages,
}

impl<H: HostPage> TipEngine<H> {
    pub fn new(
        host: H,
        device: DeviceClass,
        store: Box<dyn SettingsStore>,
        presenter: Box<dyn SettingsPresenter>,
        messages: Messages,
    ) -> Self {
        let settings = store.load();
        Self {
            host,
            device,
            timings: Timings::for_device(device),
            placement: PlacementConfig::default(),
            timers: TimerQueue::new(),
            registry: Registry::new(),
            settings,
            store,
            presenter,
            webfont: WebfontInjector::new(),
            messages,
        }
    }

    /// Override the placement offsets (hosts with coarser units than pixels)
    pub fn with_placement(mut self, placement: PlacementConfig) -> Self {
        self.placement = placement;
        self
    }

    /// Override the webfont injector (custom catalog base URL)
    pub fn with_webfont(mut self, webfont: WebfontInjector) -> Self {
        self.webfont = webfont;
        self
    }

    /// Scan the page: apply webfonts when enabled, bind tooltip instances
    pub fn init(&mut self) {
        if self.settings.enabled && self.settings.use_webfont {
            self.webfont.process_page(&mut self.host, &self.settings);
        }
        self.bind_interactions();
    }

    fn bind_interactions(&mut self) {
        if !self.settings.enabled {
            return;
        }
        for trigger in self.host.triggers() {
            let text = self.host.tip_text(trigger);
            self.registry.insert(TooltipInstance::new(trigger, text));
        }
        log::debug!("bound {} tooltip triggers", self.registry.len());
    }

    /// Feed one pointer/touch event from the host page
    pub fn handle_event(&mut self, event: PointerEvent, now: Instant) {
        match self.device {
            DeviceClass::Pointer => self.handle_pointer(event, now),
            DeviceClass::Touch => self.handle_touch(event, now),
        }
    }

    fn handle_pointer(&mut self, event: PointerEvent, now: Instant) {
        match event {
            PointerEvent::TriggerEnter(trigger) => {
                if let Some(instance) = self.registry.get_mut(trigger) {
                    tooltip_events::pointer_enter_trigger(
                        instance,
                        &mut self.timers,
                        &self.timings,
                        now,
                    );
                }
            }
            PointerEvent::TriggerLeave(trigger) | PointerEvent::SurfaceLeave(trigger) => {
                if let Some(instance) = self.registry.get_mut(trigger) {
                    tooltip_events::pointer_leave(instance, &mut self.timers, &self.timings, now);
                }
            }
            PointerEvent::SurfaceEnter(trigger) => {
                if let Some(instance) = self.registry.get_mut(trigger) {
                    tooltip_events::pointer_enter_surface(
                        instance,
                        &mut self.host,
                        &mut self.timers,
                    );
                }
            }
            PointerEvent::SettingsPressed(trigger) => self.open_settings(trigger, now),
            // Tap events belong to the touch path
            PointerEvent::Tap(_) | PointerEvent::TapOutside => {}
        }
    }

    fn handle_touch(&mut self, event: PointerEvent, now: Instant) {
        match event {
            PointerEvent::Tap(trigger) => dispatcher::tap_trigger(
                &mut self.registry,
                trigger,
                &mut self.host,
                &mut self.timers,
                &self.timings,
                &self.placement,
                now,
            ),
            PointerEvent::TapOutside => dispatcher::tap_outside(
                &mut self.registry,
                &mut self.host,
                &mut self.timers,
                &self.timings,
                now,
            ),
            PointerEvent::SettingsPressed(trigger) => self.open_settings(trigger, now),
            // Hover events never arrive on touch devices
            _ => {}
        }
    }

    fn open_settings(&mut self, trigger: TriggerId, now: Instant) {
        let Some(instance) = self.registry.get_mut(trigger) else {
            return;
        };
        if !tooltip_events::settings_pressed(instance, &mut self.timers, &self.timings, now) {
            return;
        }

        if let Err(err) = self.presenter.open(&self.settings) {
            log::warn!("failed to open settings dialog: {err}");
            let text = self.messages.text(MsgKey::SettingsLoadFailed);
            self.host.notify(text);
        }

        // Hidden after the attempt, success or not
        if let Some(instance) = self.registry.get_mut(trigger) {
            instance.hide(&mut self.host, &mut self.timers, &self.timings, now);
        }
    }

    /// Drain due timers; the host loop calls this once per iteration
    pub fn tick(&mut self, now: Instant) {
        for fired in self.timers.pop_due(now) {
            let Some(instance) = self.registry.get_mut(fired.trigger) else {
                continue;
            };
            match fired.kind {
                TimerKind::ShowDelay => {
                    instance.show_timer_fired();
                    instance.show(&mut self.host, &mut self.timers, &self.placement);
                }
                TimerKind::HideDelay => {
                    instance.hide_timer_fired();
                    instance.hide(&mut self.host, &mut self.timers, &self.timings, now);
                }
                TimerKind::Remove => instance.finish_hide(&mut self.host),
                TimerKind::SettingsCooldown => instance.cooldown_elapsed(),
            }
        }
    }

    /// Earliest pending deadline, for the host loop's poll timeout
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    /// A saved settings record comes into force: persist it, then redo the
    /// webfont pass under the new record
    pub fn apply_settings(&mut self, new: Settings) {
        self.settings = new;
        self.store.save(&self.settings);

        self.webfont.clear(&mut self.host);
        if self.settings.enabled && self.settings.use_webfont {
            self.webfont.process_page(&mut self.host, &self.settings);
        }
    }

    /// Remember catalog versions for later font-face rules
    pub fn note_fonts(&mut self, fonts: &[FontInfo]) {
        self.webfont.note_versions(fonts);
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    pub fn device(&self) -> DeviceClass {
        self.device
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Destroy every instance and drop injected styles; the page outlives
    /// the engine untouched otherwise
    pub fn teardown(&mut self) {
        let mut instances: Vec<TooltipInstance> = self.registry.drain().collect();
        for instance in &mut instances {
            instance.destroy(&mut self.host, &mut self.timers);
        }
        self.webfont.clear(&mut self.host);
        self.timers.clear();
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod engine_tests;
