use rvpipe_core::Simulator;
use rvpipe_core::config::Config;
use rvpipe_core::core::Cpu;
use rvpipe_core::core::arch::trap::TrapInfo;

pub struct TestContext {
    pub sim: Simulator,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        Self {
            sim: Simulator::new(&config),
        }
    }

    /// Convenience accessor for the CPU.
    pub fn cpu(&self) -> &Cpu {
        &self.sim.cpu
    }

    /// Mutable convenience accessor for the CPU.
    pub fn cpu_mut(&mut self) -> &mut Cpu {
        &mut self.sim.cpu
    }

    /// Base address programs are loaded at (and the reset PC).
    pub fn base(&self) -> u32 {
        self.sim.cpu.memory.base()
    }

    /// Load a sequence of 32-bit instructions at the reset PC.
    pub fn load_program(self, instructions: &[u32]) -> Self {
        let base = self.base();
        self.load_at(base, instructions)
    }

    /// Load a sequence of 32-bit instructions at `addr`.
    pub fn load_at(mut self, addr: u32, instructions: &[u32]) -> Self {
        for (i, inst) in instructions.iter().enumerate() {
            self.sim.cpu.memory.write_u32(addr + (i as u32) * 4, *inst);
        }
        self
    }

    /// Set a general-purpose register value.
    pub fn set_reg(&mut self, reg: usize, val: u32) {
        self.sim.cpu.regs.write(reg, val);
    }

    /// Read a general-purpose register value.
    pub fn get_reg(&self, reg: usize) -> u32 {
        self.sim.cpu.regs.read(reg)
    }

    /// Run until the first trap activation or `cycles` elapse.
    pub fn run(&mut self, cycles: u64) -> Option<TrapInfo> {
        for _ in 0..cycles {
            if let Some(trap) = self.sim.tick() {
                return Some(trap);
            }
        }
        None
    }

    /// Run a program expected to finish with `EBREAK`; returns the trap.
    pub fn run_to_ebreak(&mut self) -> TrapInfo {
        let trap = self
            .run(10_000)
            .expect("program did not trap within 10000 cycles");
        assert_eq!(trap.cause(), 3, "expected a breakpoint, got {trap:?}");
        trap
    }
}
