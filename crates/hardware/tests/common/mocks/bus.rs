use mockall::mock;
use rvpipe_core::soc::traits::{BusRequest, BusResponse, DataBus};

mock! {
    pub Bus {}
    impl DataBus for Bus {
        fn request(&mut self, req: &BusRequest) -> BusResponse;
    }
}

/// Response granting a request with the given read data.
pub fn granted(rdata: u32) -> BusResponse {
    BusResponse { grant: true, rdata }
}

/// Response withholding the grant.
pub fn stalled() -> BusResponse {
    BusResponse::default()
}
