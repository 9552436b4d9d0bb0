//! Washing machine that drives its devices through one cycle.

use crate::core::{
    CycleHistory, CycleStage, LaundryBatch, LaundryStatus, Program, ProgramConfiguration,
};
use crate::effects::devices::{DirtDetector, Engine, WaterPump};
use crate::effects::report::{CycleError, CycleReport};
use crate::enforcement::{
    primary_error_code, LoadContext, LoadRules, LoadRulesBuilder, LoadViolation,
};
use crate::settings::{MachineSettings, SettingsError};
use std::sync::Arc;
use stillwater::validation::Validation;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Orchestrates a wash cycle over shared devices.
///
/// The machine keeps no state between cycles besides its device handles,
/// settings and load rules, so `start` can be called repeatedly. The weight
/// limit from the settings is always enforced; custom rules only add to it.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use washcycle::builder::{batch_of, program_with_spin};
/// use washcycle::core::{Material, Percentage, Program};
/// use washcycle::effects::{
///     Engine, EngineError, FixedDirtDetector, PumpError, WashingMachine, WaterPump,
/// };
///
/// struct Motor;
/// impl Engine for Motor {
///     fn run_washing(&self, _minutes: u32) -> Result<(), EngineError> { Ok(()) }
///     fn spin(&self) -> Result<(), EngineError> { Ok(()) }
/// }
///
/// struct Pump;
/// impl WaterPump for Pump {
///     fn pour(&self, _weight_kg: f64) -> Result<(), PumpError> { Ok(()) }
///     fn release(&self) -> Result<(), PumpError> { Ok(()) }
/// }
///
/// let machine = WashingMachine::new(
///     Arc::new(FixedDirtDetector(Percentage::new(60.0).unwrap())),
///     Arc::new(Motor),
///     Arc::new(Pump),
/// );
///
/// let batch = batch_of(5.0, Material::Cotton).unwrap();
/// let status = machine
///     .start(&batch, &program_with_spin(Program::Autodetect, true).unwrap())
///     .unwrap();
///
/// assert!(status.is_success());
/// assert_eq!(status.program(), Some(Program::Long));
/// ```
pub struct WashingMachine {
    detector: Arc<dyn DirtDetector>,
    engine: Arc<dyn Engine>,
    pump: Arc<dyn WaterPump>,
    settings: MachineSettings,
    weight_rule: LoadRules,
    rules: LoadRules,
}

impl WashingMachine {
    /// Create a machine with default settings and load rules
    pub fn new(
        detector: Arc<dyn DirtDetector>,
        engine: Arc<dyn Engine>,
        pump: Arc<dyn WaterPump>,
    ) -> Self {
        let settings = MachineSettings::default();
        Self {
            detector,
            engine,
            pump,
            weight_rule: LoadRules::from_settings(&settings),
            settings,
            rules: LoadRulesBuilder::new().build(),
        }
    }

    /// Replace the settings after validating them.
    ///
    /// The weight rule follows the new settings. Custom rules set through
    /// [`with_rules`](Self::with_rules) are kept.
    pub fn with_settings(mut self, settings: MachineSettings) -> Result<Self, SettingsError> {
        settings.validate()?;
        self.weight_rule = LoadRules::from_settings(&settings);
        self.settings = settings;
        Ok(self)
    }

    /// Replace the custom load rules.
    ///
    /// These run alongside the weight limit from the settings, never
    /// instead of it.
    pub fn with_rules(mut self, rules: LoadRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn settings(&self) -> &MachineSettings {
        &self.settings
    }

    /// Run one cycle and return its status.
    ///
    /// A refused load is `Ok` with a failure status. `Err` means a device
    /// failed after the load was accepted.
    pub fn start(
        &self,
        batch: &LaundryBatch,
        config: &ProgramConfiguration,
    ) -> Result<LaundryStatus, CycleError> {
        self.run_cycle(batch, config).map(|report| report.status)
    }

    /// Run one cycle and return the full report, including stage history.
    pub fn run_cycle(
        &self,
        batch: &LaundryBatch,
        config: &ProgramConfiguration,
    ) -> Result<CycleReport, CycleError> {
        let cycle_id = Uuid::new_v4();
        info!(
            %cycle_id,
            weight_kg = batch.weight_kg(),
            material = batch.material().name(),
            program = config.program().name(),
            spin = config.spin(),
            "starting wash cycle"
        );

        let history = CycleHistory::new();

        let violations = self.check_load(&LoadContext::new(batch, config));
        if !violations.is_empty() {
            let code = primary_error_code(&violations);
            let reasons = violations
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%cycle_id, ?code, %reasons, "load rejected");
            return Ok(CycleReport {
                cycle_id,
                status: LaundryStatus::failure(code),
                history: history.advance(CycleStage::Rejected),
            });
        }

        let program = self.resolve_program(batch, config)?;
        let minutes = self.settings.duration_minutes(program);

        self.pump.pour(batch.weight_kg())?;
        let history = history.advance(CycleStage::Filled);

        if let Err(error) = self.engine.run_washing(minutes) {
            self.drain_after_fault(cycle_id, history.current());
            return Err(error.into());
        }
        let mut history = history.advance(CycleStage::Washed);

        if config.spin() {
            if let Err(error) = self.engine.spin() {
                self.drain_after_fault(cycle_id, history.current());
                return Err(error.into());
            }
            history = history.advance(CycleStage::Spun);
        }

        self.pump.release()?;
        let history = history.advance(CycleStage::Drained);

        info!(%cycle_id, program = program.name(), minutes, "wash cycle complete");
        Ok(CycleReport {
            cycle_id,
            status: LaundryStatus::success(program),
            history,
        })
    }

    /// Every violation from the weight rule and the custom rules.
    fn check_load(&self, context: &LoadContext<'_>) -> Vec<LoadViolation> {
        let checks = vec![self.weight_rule.enforce(context), self.rules.enforce(context)];
        match Validation::all_vec(checks).map(|_| ()) {
            Validation::Success(()) => Vec::new(),
            Validation::Failure(errors) => errors.iter().cloned().collect(),
        }
    }

    /// Concrete program to run; consults the detector for `Autodetect`.
    fn resolve_program(
        &self,
        batch: &LaundryBatch,
        config: &ProgramConfiguration,
    ) -> Result<Program, CycleError> {
        match config.program() {
            Program::Autodetect => {
                let degree = self.detector.detect_dirt_degree(batch)?;
                let program = self.settings.program_for_degree(degree);
                debug!(%degree, program = program.name(), "autodetected program");
                Ok(program)
            }
            program => Ok(program),
        }
    }

    /// Drain the drum after the engine failed with water in it.
    fn drain_after_fault(&self, cycle_id: Uuid, stage: CycleStage) {
        warn!(%cycle_id, %stage, "engine failed, draining drum");
        if let Err(error) = self.pump.release() {
            warn!(%cycle_id, %error, "drain after engine failure also failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{batch_of, program_with_spin};
    use crate::core::{ErrorCode, Material, Percentage, WashResult};
    use crate::effects::devices::{DetectorError, EngineError, PumpError};
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Detect,
        Pour(f64),
        RunWashing(u32),
        Spin,
        Release,
    }

    /// Records every device call in order; failures are opt-in.
    #[derive(Default)]
    struct Recorder {
        calls: Mutex<Vec<Call>>,
        degree: Option<f64>,
        fail_detect: bool,
        fail_pour: bool,
        fail_wash: bool,
        fail_spin: bool,
        fail_release: bool,
    }

    impl Recorder {
        fn log(&self, call: Call) {
            self.calls.lock().unwrap().push(call);
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl DirtDetector for Recorder {
        fn detect_dirt_degree(&self, _batch: &LaundryBatch) -> Result<Percentage, DetectorError> {
            self.log(Call::Detect);
            if self.fail_detect {
                return Err(DetectorError::Unavailable("lens fogged".to_string()));
            }
            Ok(Percentage::new(self.degree.unwrap_or(0.0)).unwrap())
        }
    }

    impl Engine for Recorder {
        fn run_washing(&self, minutes: u32) -> Result<(), EngineError> {
            self.log(Call::RunWashing(minutes));
            if self.fail_wash {
                return Err(EngineError::Stalled { minutes: 3 });
            }
            Ok(())
        }

        fn spin(&self) -> Result<(), EngineError> {
            self.log(Call::Spin);
            if self.fail_spin {
                return Err(EngineError::SpinAborted("imbalance".to_string()));
            }
            Ok(())
        }
    }

    impl WaterPump for Recorder {
        fn pour(&self, weight_kg: f64) -> Result<(), PumpError> {
            self.log(Call::Pour(weight_kg));
            if self.fail_pour {
                return Err(PumpError::NoSupply);
            }
            Ok(())
        }

        fn release(&self) -> Result<(), PumpError> {
            self.log(Call::Release);
            if self.fail_release {
                return Err(PumpError::DrainBlocked);
            }
            Ok(())
        }
    }

    fn machine_with(recorder: Recorder) -> (WashingMachine, Arc<Recorder>) {
        let recorder = Arc::new(recorder);
        let machine = WashingMachine::new(recorder.clone(), recorder.clone(), recorder.clone());
        (machine, recorder)
    }

    #[test]
    fn devices_run_in_order() {
        let (machine, recorder) = machine_with(Recorder::default());
        let batch = batch_of(5.0, Material::Cotton).unwrap();

        let status = machine
            .start(&batch, &program_with_spin(Program::Short, true).unwrap())
            .unwrap();

        assert_eq!(status.result(), WashResult::Success);
        assert_eq!(
            recorder.calls(),
            vec![
                Call::Pour(5.0),
                Call::RunWashing(30),
                Call::Spin,
                Call::Release
            ]
        );
    }

    #[test]
    fn rejected_load_touches_no_device() {
        let (machine, recorder) = machine_with(Recorder::default());
        let batch = batch_of(10.0, Material::Cotton).unwrap();

        let report = machine
            .run_cycle(&batch, &program_with_spin(Program::Autodetect, true).unwrap())
            .unwrap();

        assert_eq!(report.status.error_code(), ErrorCode::TooHeavy);
        assert_eq!(report.final_stage(), CycleStage::Rejected);
        assert!(recorder.calls().is_empty());
    }

    #[test]
    fn autodetect_uses_program_duration() {
        let (machine, recorder) = machine_with(Recorder {
            degree: Some(20.0),
            ..Recorder::default()
        });
        let batch = batch_of(3.0, Material::Synthetic).unwrap();

        let status = machine
            .start(&batch, &program_with_spin(Program::Autodetect, false).unwrap())
            .unwrap();

        assert_eq!(status.program(), Some(Program::Medium));
        assert_eq!(
            recorder.calls(),
            vec![
                Call::Detect,
                Call::Pour(3.0),
                Call::RunWashing(60),
                Call::Release
            ]
        );
    }

    #[test]
    fn report_records_stage_path() {
        let (machine, _recorder) = machine_with(Recorder::default());
        let batch = batch_of(2.0, Material::Jeans).unwrap();

        let with_spin = machine
            .run_cycle(&batch, &program_with_spin(Program::Long, true).unwrap())
            .unwrap();
        assert_eq!(
            with_spin.history.get_path(),
            vec![
                CycleStage::Idle,
                CycleStage::Filled,
                CycleStage::Washed,
                CycleStage::Spun,
                CycleStage::Drained,
            ]
        );

        let without_spin = machine
            .run_cycle(&batch, &program_with_spin(Program::Long, false).unwrap())
            .unwrap();
        assert!(!without_spin.history.get_path().contains(&CycleStage::Spun));
        assert_ne!(with_spin.cycle_id, without_spin.cycle_id);
    }

    #[test]
    fn detector_failure_propagates_before_any_water() {
        let (machine, recorder) = machine_with(Recorder {
            fail_detect: true,
            ..Recorder::default()
        });
        let batch = batch_of(3.0, Material::Cotton).unwrap();

        let config = program_with_spin(Program::Autodetect, true).unwrap();
        let result = machine.start(&batch, &config);

        assert!(matches!(result, Err(CycleError::Detector(_))));
        assert_eq!(recorder.calls(), vec![Call::Detect]);
    }

    #[test]
    fn pour_failure_stops_the_cycle() {
        let (machine, recorder) = machine_with(Recorder {
            fail_pour: true,
            ..Recorder::default()
        });
        let batch = batch_of(3.0, Material::Cotton).unwrap();

        let config = program_with_spin(Program::Short, true).unwrap();
        let result = machine.start(&batch, &config);

        assert!(matches!(result, Err(CycleError::Pump(PumpError::NoSupply))));
        assert_eq!(recorder.calls(), vec![Call::Pour(3.0)]);
    }

    #[test]
    fn engine_failure_still_drains() {
        let (machine, recorder) = machine_with(Recorder {
            fail_wash: true,
            ..Recorder::default()
        });
        let batch = batch_of(3.0, Material::Cotton).unwrap();

        let config = program_with_spin(Program::Short, true).unwrap();
        let result = machine.start(&batch, &config);

        assert!(matches!(
            result,
            Err(CycleError::Engine(EngineError::Stalled { .. }))
        ));
        assert_eq!(
            recorder.calls(),
            vec![Call::Pour(3.0), Call::RunWashing(30), Call::Release]
        );
    }

    #[test]
    fn spin_failure_reports_engine_error_even_if_drain_fails() {
        let (machine, recorder) = machine_with(Recorder {
            fail_spin: true,
            fail_release: true,
            ..Recorder::default()
        });
        let batch = batch_of(3.0, Material::Cotton).unwrap();

        let config = program_with_spin(Program::Medium, true).unwrap();
        let result = machine.start(&batch, &config);

        assert!(matches!(
            result,
            Err(CycleError::Engine(EngineError::SpinAborted(_)))
        ));
        assert_eq!(recorder.calls().last(), Some(&Call::Release));
    }

    #[test]
    fn custom_settings_change_limits_and_durations() {
        let settings = MachineSettings {
            max_weight_kg: 12.0,
            short_minutes: 15,
            ..MachineSettings::default()
        };
        let (machine, recorder) = machine_with(Recorder::default());
        let machine = machine.with_settings(settings).unwrap();
        let batch = batch_of(10.0, Material::Cotton).unwrap();

        let status = machine
            .start(&batch, &program_with_spin(Program::Short, false).unwrap())
            .unwrap();

        assert!(status.is_success());
        assert!(recorder.calls().contains(&Call::RunWashing(15)));
    }

    #[test]
    fn invalid_settings_are_refused() {
        let (machine, _recorder) = machine_with(Recorder::default());
        let nan_limit = MachineSettings {
            max_weight_kg: f64::NAN,
            ..MachineSettings::default()
        };
        assert!(matches!(
            machine.with_settings(nan_limit),
            Err(SettingsError::Invalid(_))
        ));

        let (machine, _recorder) = machine_with(Recorder::default());
        let inverted = MachineSettings {
            medium_threshold: 80,
            long_threshold: 40,
            ..MachineSettings::default()
        };
        assert!(machine.with_settings(inverted).is_err());
    }

    #[test]
    fn custom_rules_keep_the_weight_limit() {
        let rules = LoadRulesBuilder::new()
            .require_pred(|_ctx| true, "never fails".to_string())
            .build();
        let (machine, recorder) = machine_with(Recorder::default());
        let machine = machine.with_rules(rules);

        let heavy = batch_of(10.0, Material::Cotton).unwrap();
        let status = machine
            .start(&heavy, &program_with_spin(Program::Short, false).unwrap())
            .unwrap();
        assert_eq!(status.error_code(), ErrorCode::TooHeavy);
        assert!(recorder.calls().is_empty());

        let huge = batch_of(500.0, Material::Cotton).unwrap();
        let status = machine
            .start(&huge, &program_with_spin(Program::Short, false).unwrap())
            .unwrap();
        assert_eq!(status.error_code(), ErrorCode::TooHeavy);
    }

    #[test]
    fn custom_rules_survive_new_settings() {
        let rules = LoadRulesBuilder::new()
            .require_pred(|ctx| !ctx.config.spin(), "spin disabled".to_string())
            .build();
        let (machine, _recorder) = machine_with(Recorder::default());
        let settings = MachineSettings {
            max_weight_kg: 12.0,
            ..MachineSettings::default()
        };
        let machine = machine.with_rules(rules).with_settings(settings).unwrap();
        let batch = batch_of(10.0, Material::Cotton).unwrap();

        let status = machine
            .start(&batch, &program_with_spin(Program::Short, true).unwrap())
            .unwrap();
        assert_eq!(status.error_code(), ErrorCode::UnknownError);

        let status = machine
            .start(&batch, &program_with_spin(Program::Short, false).unwrap())
            .unwrap();
        assert!(status.is_success());
    }

    #[test]
    fn custom_rule_rejects_with_unknown_error() {
        let rules = LoadRulesBuilder::new()
            .require_pred(
                |ctx| !(ctx.batch.material().is_delicate() && ctx.config.spin()),
                "delicate fabrics must not be spun".to_string(),
            )
            .build();
        let (machine, recorder) = machine_with(Recorder::default());
        let machine = machine.with_rules(rules);
        let batch = batch_of(2.0, Material::Delicate).unwrap();

        let status = machine
            .start(&batch, &program_with_spin(Program::Short, true).unwrap())
            .unwrap();

        assert_eq!(status.error_code(), ErrorCode::UnknownError);
        assert!(recorder.calls().is_empty());
    }
}
